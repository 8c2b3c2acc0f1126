//! 叶子目标文件检测

use crate::error::{Result, SlibError};
use crate::graph::DependencyGraph;

/// 叶子报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafReport {
    pub library: String,
    /// 归档顺序的叶子目标文件
    pub leaves: Vec<String>,
    pub total: usize,
}

impl LeafReport {
    pub fn count(&self) -> usize {
        self.leaves.len()
    }

    pub fn non_leaf_count(&self) -> usize {
        self.total - self.leaves.len()
    }

    /// 叶子占比 (四舍五入到整数百分比)
    pub fn percentage(&self) -> Result<u32> {
        if self.total == 0 {
            return Err(SlibError::DivisionUndefined);
        }
        let ratio = self.leaves.len() as f64 / self.total as f64 * 100.0;
        Ok(ratio.round() as u32)
    }
}

/// 列出不依赖归档内其他目标文件的目标文件 (EMPTY 记录的依赖集为空, 同样是叶子)
pub fn find_leaves(graph: &DependencyGraph) -> LeafReport {
    let leaves = graph
        .objects
        .iter()
        .filter(|o| o.is_leaf())
        .map(|o| o.filename.clone())
        .collect();

    LeafReport {
        library: graph.library.clone(),
        leaves,
        total: graph.len(),
    }
}
