//! 依赖图组装

use crate::classify::{classify_or_empty, ObjectRecord};
use crate::dump::SymbolDump;
use crate::index::{build_index, SymbolIndex};
use rayon::prelude::*;
use std::collections::HashSet;

/// 一个静态库的依赖图, objects 保持归档成员顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    pub library: String,
    pub objects: Vec<ObjectRecord>,
}

impl DependencyGraph {
    pub fn new(library: &str) -> Self {
        Self {
            library: library.to_string(),
            objects: Vec::new(),
        }
    }

    pub fn get(&self, filename: &str) -> Option<&ObjectRecord> {
        self.objects.iter().find(|o| o.filename == filename)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// 解析成员列表输出: 每行一个文件名, 去重保留首次出现
///
/// 归档允许同名成员, 这里以文件名为键, 后出现的同名成员被忽略。
pub fn parse_member_list(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut members = Vec::new();
    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name) {
            members.push(name.to_string());
        } else {
            tracing::warn!("Duplicate archive member {}, keeping the first one", name);
        }
    }
    members
}

/// 依赖图组装器
pub struct GraphAssembler {
    parallel: bool,
}

impl GraphAssembler {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 先构建完整索引, 再逐个目标文件分类
    pub fn assemble(&self, library: &str, members: &[String], dump_text: &str) -> DependencyGraph {
        let dump = SymbolDump::parse(dump_text);
        let index = build_index(&dump);
        tracing::info!(
            "Classifying {} object files ({} sections in dump)",
            members.len(),
            dump.section_count()
        );
        self.assemble_with_index(library, members, &dump, &index)
    }

    pub fn assemble_with_index(
        &self,
        library: &str,
        members: &[String],
        dump: &SymbolDump<'_>,
        index: &SymbolIndex,
    ) -> DependencyGraph {
        // 索引只读, 各目标文件之间没有共享可变状态; collect 保持输入顺序
        let objects: Vec<ObjectRecord> = if self.parallel {
            members
                .par_iter()
                .map(|name| classify_or_empty(dump, index, name))
                .collect()
        } else {
            members
                .iter()
                .map(|name| classify_or_empty(dump, index, name))
                .collect()
        };

        for object in &objects {
            tracing::debug!("{} <- {:?}", object.filename, object.dependencies);
        }

        DependencyGraph {
            library: library.to_string(),
            objects,
        }
    }
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new()
    }
}
