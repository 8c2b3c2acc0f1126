//! 分析配置

use inspect::BinutilsInspector;
use std::path::{Path, PathBuf};

/// 分析配置
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// 列出归档成员的工具
    pub ar: String,
    /// 输出符号表和归档索引的工具
    pub nm: String,
    /// 是否并行分类目标文件
    pub parallel: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            ar: "ar".to_string(),
            nm: "nm".to_string(),
            parallel: true,
        }
    }
}

impl AnalyzeConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("SLIBDEP_AR") {
            if !v.trim().is_empty() {
                config.ar = v;
            }
        }

        if let Some(v) = lookup("SLIBDEP_NM") {
            if !v.trim().is_empty() {
                config.nm = v;
            }
        }

        if let Some(v) = lookup("SLIBDEP_PARALLEL") {
            config.parallel = !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off");
        }

        config
    }

    pub fn inspector(&self) -> BinutilsInspector {
        BinutilsInspector::new().with_tools(&self.ar, &self.nm)
    }
}

/// 默认输出路径: 替换归档扩展名为 `.json`
pub fn default_output_path(archive: &Path) -> PathBuf {
    if archive.file_name().is_none() {
        return PathBuf::from("out.json");
    }
    archive.with_extension("json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = AnalyzeConfig::default();
        assert_eq!(config.ar, "ar");
        assert_eq!(config.nm, "nm");
        assert!(config.parallel);
    }

    #[test]
    fn test_config_overrides() {
        let config = AnalyzeConfig::from_lookup(lookup(&[
            ("SLIBDEP_AR", "llvm-ar"),
            ("SLIBDEP_NM", "x86_64-linux-gnu-nm"),
            ("SLIBDEP_PARALLEL", "0"),
        ]));
        assert_eq!(config.ar, "llvm-ar");
        assert_eq!(config.nm, "x86_64-linux-gnu-nm");
        assert!(!config.parallel);
        assert_eq!(config.inspector().ar(), "llvm-ar");
    }

    #[test]
    fn test_config_ignores_blank_tool() {
        let config = AnalyzeConfig::from_lookup(lookup(&[("SLIBDEP_AR", " "), ("SLIBDEP_PARALLEL", "yes")]));
        assert_eq!(config.ar, "ar");
        assert!(config.parallel);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(Path::new("libfoo.a")), PathBuf::from("libfoo.json"));
        assert_eq!(
            default_output_path(Path::new("/usr/lib/libc.a")),
            PathBuf::from("/usr/lib/libc.json")
        );
        assert_eq!(default_output_path(Path::new("archive")), PathBuf::from("archive.json"));
        assert_eq!(default_output_path(Path::new("")), PathBuf::from("out.json"));
    }
}
