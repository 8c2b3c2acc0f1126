//! 目标文件符号分类

use crate::dump::SymbolDump;
use crate::error::{Result, SlibError};
use crate::index::SymbolIndex;
use std::collections::HashSet;

/// 未定义符号的类型码
pub const UNDEFINED: &str = "U";

/// 可在归档内解析的引用: 符号 -> 定义它的目标文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRef {
    pub symbol: String,
    pub object: String,
}

impl LocalRef {
    pub fn new(symbol: &str, object: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            object: object.to_string(),
        }
    }
}

/// 目标文件记录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectRecord {
    pub filename: String,
    pub defined_symbols: Vec<String>,
    pub unresolved_local: Vec<LocalRef>,
    pub unresolved_global: Vec<String>,
    /// 出边: unresolved_local 中出现的其他目标文件 (不含自身)
    pub dependencies: Vec<String>,
}

impl ObjectRecord {
    /// 四个集合均为空的记录
    pub fn empty(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.defined_symbols.is_empty()
            && self.unresolved_local.is_empty()
            && self.unresolved_global.is_empty()
            && self.dependencies.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// 保序去重集合
#[derive(Default)]
struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    fn insert(&mut self, value: &str) {
        if self.seen.insert(value.to_string()) {
            self.items.push(value.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// 对单个目标文件的段做分类
///
/// - `U` 且在索引中: 记入 unresolved_local, 定义方记入 dependencies
/// - `U` 且不在索引中: 记入 unresolved_global
/// - 其他类型码: 记入 defined_symbols
///
/// 段不存在时返回 `SectionNotFound`。
pub fn classify(dump: &SymbolDump<'_>, index: &SymbolIndex, filename: &str) -> Result<ObjectRecord> {
    let lines = dump
        .section(filename)
        .ok_or_else(|| SlibError::SectionNotFound(filename.to_string()))?;

    let mut defined = OrderedSet::default();
    let mut global = OrderedSet::default();
    let mut dependencies = OrderedSet::default();
    let mut unresolved_local = Vec::new();

    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [.., kind, symbol] = tokens.as_slice() else {
            tracing::warn!("{}: skipping malformed symbol line {:?}", filename, line);
            continue;
        };

        if *kind != UNDEFINED {
            defined.insert(symbol);
            continue;
        }

        match index.get(symbol) {
            Some(owner) => {
                unresolved_local.push(LocalRef::new(symbol, owner));
                if owner == filename {
                    tracing::debug!("{}: self reference through {}", filename, symbol);
                } else {
                    dependencies.insert(owner);
                }
            }
            None => global.insert(symbol),
        }
    }

    Ok(ObjectRecord {
        filename: filename.to_string(),
        defined_symbols: defined.into_vec(),
        unresolved_local,
        unresolved_global: global.into_vec(),
        dependencies: dependencies.into_vec(),
    })
}

/// 分类失败时退化为空记录, 保证每个归档成员都有一条
pub fn classify_or_empty(dump: &SymbolDump<'_>, index: &SymbolIndex, filename: &str) -> ObjectRecord {
    match classify(dump, index, filename) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("{}, recording {} as empty", e, filename);
            ObjectRecord::empty(filename)
        }
    }
}
