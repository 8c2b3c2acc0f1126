use crate::graph::DependencyGraph;
use crate::leaves::LeafReport;
use crate::verify::{CandidateRow, VerifyReport};

const NAME_HEADER: &str = "OBJ_FILE";

/// 纯文本报告生成器
pub struct TableRenderer {
    width: usize,
}

impl TableRenderer {
    /// 名字列宽取图中最长的目标文件名 (至少为表头宽度)
    pub fn for_graph(graph: &DependencyGraph) -> Self {
        let width = graph
            .objects
            .iter()
            .map(|o| o.filename.len())
            .chain(std::iter::once(NAME_HEADER.len()))
            .max()
            .unwrap_or(NAME_HEADER.len());
        Self { width }
    }

    /// 分析摘要: 每个目标文件及其依赖
    pub fn summary(&self, graph: &DependencyGraph) -> String {
        let mut lines = vec![
            String::new(),
            "SUMMARY OF ANALYSIS".to_string(),
            format!(
                "The static library '{}' contains {} object files:",
                graph.library,
                graph.len()
            ),
            self.header("DEPENDENCIES"),
        ];
        for object in &graph.objects {
            lines.push(self.row(&object.filename, &object.dependencies));
        }
        lines.join("\n")
    }

    /// 叶子报告
    pub fn leaves(&self, report: &LeafReport) -> String {
        let mut lines = vec![format!(
            "Object files in '{}' that do not depend on any others are:",
            report.library
        )];
        for leaf in &report.leaves {
            lines.push(format!("- {}", leaf));
        }
        lines.push(match report.percentage() {
            Ok(pct) => format!(
                "which represents {}/{} of all object files or {}%.",
                report.count(),
                report.total,
                pct
            ),
            Err(_) => format!(
                "which represents {}/{} of all object files.",
                report.count(),
                report.total
            ),
        });
        lines.join("\n")
    }

    /// 完整性校验报告
    pub fn verification(&self, report: &VerifyReport, list_name: &str) -> String {
        let mut lines = vec![
            format!(
                "Dependencies in '{}' of the {} object files from '{}':",
                report.library,
                report.rows.len(),
                list_name
            ),
            self.header("DEPENDENCIES"),
        ];
        for row in &report.rows {
            lines.push(match row {
                CandidateRow::Known { name, dependencies } => self.row(name, dependencies),
                CandidateRow::Unknown { name } => format!("- No object file '{}' found", name),
            });
        }

        if report.is_complete() {
            lines.push("This list of object files is COMPLETE".to_string());
        } else {
            lines.push(String::new());
            lines.push("This list of object files is INCOMPLETE:".to_string());
            lines.push(self.header("MISSING_DEPENDENCIES"));
            for entry in &report.incomplete {
                lines.push(self.row(&entry.name, &entry.missing));
            }
        }
        lines.join("\n")
    }

    fn header(&self, title: &str) -> String {
        format!("  {:<width$} <- {}", NAME_HEADER, title, width = self.width)
    }

    fn row(&self, name: &str, deps: &[String]) -> String {
        let deps = if deps.is_empty() {
            "No dependencies".to_string()
        } else {
            deps.join(", ")
        };
        format!("- {:<width$} <- {}", name, deps, width = self.width)
    }
}
