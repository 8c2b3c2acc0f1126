mod binutils;

pub use binutils::BinutilsInspector;

use crate::process::Result;
use async_trait::async_trait;
use std::path::Path;

/// 归档检查器 trait
#[async_trait]
pub trait ArchiveInspector: Send + Sync {
    /// 归档成员列表 (每行一个目标文件名的原始输出)
    async fn list_members(&self, archive: &Path) -> Result<String>;

    /// 含归档索引的完整符号表输出
    async fn symbol_dump(&self, archive: &Path) -> Result<String>;
}
