//! 候选目标文件列表的完整性校验

use crate::error::{Result, SlibError};
use crate::graph::DependencyGraph;
use std::collections::HashSet;
use std::path::Path;

/// 单个候选项的依赖列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRow {
    Known { name: String, dependencies: Vec<String> },
    Unknown { name: String },
}

/// 缺失依赖的候选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incomplete {
    pub name: String,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub library: String,
    pub rows: Vec<CandidateRow>,
    /// 按候选项首次出现的顺序
    pub incomplete: Vec<Incomplete>,
}

impl VerifyReport {
    pub fn verdict(&self) -> Verdict {
        if self.incomplete.is_empty() {
            Verdict::Complete
        } else {
            Verdict::Incomplete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.verdict() == Verdict::Complete
    }

    pub fn unknown(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|row| match row {
            CandidateRow::Unknown { name } => Some(name.as_str()),
            CandidateRow::Known { .. } => None,
        })
    }
}

/// 校验候选列表: 每个候选项的依赖都必须在列表中
///
/// 缺失集合是对整个候选集合求差, 与位置无关。图中不存在的名字
/// 只作提示, 不影响其他候选项的判断。
pub fn verify(graph: &DependencyGraph, candidates: &[String]) -> VerifyReport {
    let candidate_set: HashSet<&str> = candidates.iter().map(String::as_str).collect();
    let mut rows = Vec::with_capacity(candidates.len());
    let mut incomplete: Vec<Incomplete> = Vec::new();

    for name in candidates {
        let Some(record) = graph.get(name) else {
            tracing::warn!("No object file '{}' in {}", name, graph.library);
            rows.push(CandidateRow::Unknown { name: name.clone() });
            continue;
        };

        let missing: Vec<String> = record
            .dependencies
            .iter()
            .filter(|d| !candidate_set.contains(d.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() && !incomplete.iter().any(|i| &i.name == name) {
            incomplete.push(Incomplete {
                name: name.clone(),
                missing,
            });
        }

        rows.push(CandidateRow::Known {
            name: name.clone(),
            dependencies: record.dependencies.clone(),
        });
    }

    VerifyReport {
        library: graph.library.clone(),
        rows,
        incomplete,
    }
}

/// 解析候选列表: 每行一个目标文件名, 忽略空行
pub fn parse_candidate_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_candidate_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| SlibError::io(path, e))?;
    Ok(parse_candidate_list(&text))
}
