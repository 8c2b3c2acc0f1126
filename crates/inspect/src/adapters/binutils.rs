use super::ArchiveInspector;
use crate::process::{run_tool, Result};
use async_trait::async_trait;
use std::path::Path;

/// GNU binutils 检查器 (`ar -t` / `nm -s`)
pub struct BinutilsInspector {
    ar: String,
    nm: String,
}

impl BinutilsInspector {
    pub fn new() -> Self {
        Self {
            ar: "ar".to_string(),
            nm: "nm".to_string(),
        }
    }

    pub fn with_tools(mut self, ar: &str, nm: &str) -> Self {
        self.ar = ar.to_string();
        self.nm = nm.to_string();
        self
    }

    pub fn ar(&self) -> &str {
        &self.ar
    }

    pub fn nm(&self) -> &str {
        &self.nm
    }
}

impl Default for BinutilsInspector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArchiveInspector for BinutilsInspector {
    async fn list_members(&self, archive: &Path) -> Result<String> {
        let archive = archive.to_string_lossy();
        run_tool(&self.ar, &["-t", &archive]).await
    }

    async fn symbol_dump(&self, archive: &Path) -> Result<String> {
        let archive = archive.to_string_lossy();
        run_tool(&self.nm, &["-s", &archive]).await
    }
}
