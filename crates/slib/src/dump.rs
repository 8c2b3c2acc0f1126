//! `nm -s` 输出的行视图
//!
//! 输出结构: 可选的空行, `Archive index:` 头, 索引行直到空行;
//! 之后每个目标文件一个段: `<filename>:` 头, 符号行直到空行。

use std::collections::HashMap;

pub const INDEX_HEADER: &str = "Archive index:";

/// 符号表输出 (只读, 可跨线程共享)
pub struct SymbolDump<'a> {
    lines: Vec<&'a str>,
    /// 段名 -> 段头所在行号 (同名段取第一个)
    sections: HashMap<&'a str, usize>,
}

impl<'a> SymbolDump<'a> {
    pub fn parse(text: &'a str) -> Self {
        let lines: Vec<&'a str> = text.lines().map(|l| l.trim_end()).collect();

        // 段头必须紧跟在空行 (或文件开头) 之后, 避免把符号行误认为段头
        let mut sections = HashMap::new();
        for (i, line) in lines.iter().enumerate() {
            if *line == INDEX_HEADER {
                continue;
            }
            let after_blank = i == 0 || lines[i - 1].is_empty();
            if !after_blank {
                continue;
            }
            if let Some(name) = line.strip_suffix(':') {
                if !name.is_empty() {
                    sections.entry(name).or_insert(i);
                }
            }
        }

        Self { lines, sections }
    }

    /// 归档索引行 (头之后直到空行); 无索引头时返回 None
    pub fn index_lines(&self) -> Option<&[&'a str]> {
        let start = self.lines.iter().position(|l| *l == INDEX_HEADER)? + 1;
        Some(Self::until_blank(&self.lines[start..]))
    }

    /// 目标文件段的符号行
    pub fn section(&self, filename: &str) -> Option<&[&'a str]> {
        let header = *self.sections.get(filename)?;
        Some(Self::until_blank(&self.lines[header + 1..]))
    }

    /// 输出中出现的段数
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn until_blank<'s>(lines: &'s [&'a str]) -> &'s [&'a str] {
        let end = lines
            .iter()
            .position(|l| l.trim().is_empty())
            .unwrap_or(lines.len());
        &lines[..end]
    }
}
