//! 符号索引构建

use crate::dump::SymbolDump;
use std::collections::HashMap;

/// 符号名 -> 定义该符号的目标文件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolIndex {
    entries: HashMap<String, String>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入映射; 同名符号后写覆盖先写
    pub fn insert(&mut self, symbol: &str, object: &str) {
        if let Some(previous) = self.entries.insert(symbol.to_string(), object.to_string()) {
            if previous != object {
                tracing::debug!(
                    "Symbol {} listed under {} and {}, keeping {}",
                    symbol,
                    previous,
                    object,
                    object
                );
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 从符号表输出的归档索引段构建索引
///
/// 索引行格式 `<symbol> <other> <objectFile>`, 只取第一和第三个 token。
/// token 不足的行记录警告后跳过。
pub fn build_index(dump: &SymbolDump<'_>) -> SymbolIndex {
    let mut index = SymbolIndex::new();

    let Some(lines) = dump.index_lines() else {
        tracing::warn!("No archive index in symbol dump, every reference is external");
        return index;
    };

    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [symbol, _, object, ..] => index.insert(symbol, object),
            _ => tracing::warn!("Skipping malformed index line: {:?}", line),
        }
    }

    tracing::info!("Archive index: {} symbols", index.len());
    index
}
