use crate::config::AnalyzeConfig;
use crate::error::Result;
use crate::graph::{parse_member_list, DependencyGraph, GraphAssembler};
use inspect::ArchiveInspector;
use std::path::Path;

/// 静态库分析器
pub struct ArchiveAnalyzer {
    assembler: GraphAssembler,
}

impl ArchiveAnalyzer {
    pub fn new() -> Self {
        Self {
            assembler: GraphAssembler::new(),
        }
    }

    pub fn from_config(config: &AnalyzeConfig) -> Self {
        Self {
            assembler: GraphAssembler::new().with_parallel(config.parallel),
        }
    }

    /// 列出成员, 取符号表, 构建依赖图
    ///
    /// 任一外部工具失败都会中止整个分析。
    pub async fn analyze<I: ArchiveInspector + ?Sized>(
        &self,
        inspector: &I,
        archive: &Path,
    ) -> Result<DependencyGraph> {
        let library = archive.to_string_lossy();

        let members = parse_member_list(&inspector.list_members(archive).await?);
        tracing::info!("{}: {} object files", library, members.len());

        let dump = inspector.symbol_dump(archive).await?;

        Ok(self.assembler.assemble(&library, &members, &dump))
    }
}

impl Default for ArchiveAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
