//! slib - 静态库目标文件依赖分析
//!
//! 符号索引、符号分类、依赖图, 以及叶子检测和完整性校验

mod analyzer;
mod classify;
mod config;
mod document;
mod dump;
mod error;
mod graph;
mod index;
mod leaves;
mod table;
mod verify;

pub use analyzer::ArchiveAnalyzer;
pub use classify::{classify, classify_or_empty, LocalRef, ObjectRecord, UNDEFINED};
pub use config::{default_output_path, AnalyzeConfig};
pub use document::{from_str, from_value, load, save, to_string, to_value, EMPTY_MARKER, MARKER_KEY};
pub use dump::{SymbolDump, INDEX_HEADER};
pub use error::{Result, SlibError};
pub use graph::{parse_member_list, DependencyGraph, GraphAssembler};
pub use index::{build_index, SymbolIndex};
pub use leaves::{find_leaves, LeafReport};
pub use table::TableRenderer;
pub use verify::{
    parse_candidate_list, read_candidate_list, verify, CandidateRow, Incomplete, Verdict,
    VerifyReport,
};
