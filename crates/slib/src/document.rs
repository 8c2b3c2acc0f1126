//! 依赖图的持久化 JSON 文档
//!
//! ```text
//! {
//!   "slib_analysis": true,
//!   "Static library": "<archive>",
//!   "Content": { "<object>": { ...四个字段... } | "EMPTY", ... }
//! }
//! ```

use crate::classify::{LocalRef, ObjectRecord};
use crate::error::{Result, SlibError};
use crate::graph::DependencyGraph;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

pub const MARKER_KEY: &str = "slib_analysis";
pub const EMPTY_MARKER: &str = "EMPTY";

#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    #[serde(rename = "slib_analysis")]
    marker: bool,
    #[serde(rename = "Static library")]
    library: String,
    #[serde(rename = "Content")]
    content: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordDocument {
    #[serde(rename = "Dependencies", default)]
    dependencies: Vec<String>,
    #[serde(rename = "Defined symbols", default)]
    defined_symbols: Vec<String>,
    #[serde(rename = "Unresolved local symbols", default)]
    unresolved_local: Vec<Map<String, Value>>,
    #[serde(rename = "Unresolved global symbols", default)]
    unresolved_global: Vec<String>,
}

impl RecordDocument {
    fn from_record(record: &ObjectRecord) -> Self {
        let unresolved_local = record
            .unresolved_local
            .iter()
            .map(|r| {
                let mut entry = Map::new();
                entry.insert(r.symbol.clone(), Value::String(r.object.clone()));
                entry
            })
            .collect();

        Self {
            dependencies: record.dependencies.clone(),
            defined_symbols: record.defined_symbols.clone(),
            unresolved_local,
            unresolved_global: record.unresolved_global.clone(),
        }
    }

    fn into_record(self, filename: &str) -> Result<ObjectRecord> {
        let mut unresolved_local = Vec::with_capacity(self.unresolved_local.len());
        for entry in self.unresolved_local {
            let mut pairs = entry.into_iter();
            match (pairs.next(), pairs.next()) {
                (Some((symbol, Value::String(object))), None) => {
                    unresolved_local.push(LocalRef { symbol, object });
                }
                _ => {
                    return Err(SlibError::Format(format!(
                        "{}: unresolved local entries must map one symbol to one object file",
                        filename
                    )))
                }
            }
        }

        Ok(ObjectRecord {
            filename: filename.to_string(),
            defined_symbols: self.defined_symbols,
            unresolved_local,
            unresolved_global: self.unresolved_global,
            dependencies: self.dependencies,
        })
    }
}

/// 依赖图 -> JSON 值; 无任何符号的目标文件写为 "EMPTY"
pub fn to_value(graph: &DependencyGraph) -> Result<Value> {
    let mut content = Map::new();
    for record in &graph.objects {
        let entry = if record.is_empty() {
            Value::String(EMPTY_MARKER.to_string())
        } else {
            serde_json::to_value(RecordDocument::from_record(record))?
        };
        content.insert(record.filename.clone(), entry);
    }

    let document = GraphDocument {
        marker: true,
        library: graph.library.clone(),
        content,
    };
    Ok(serde_json::to_value(document)?)
}

/// JSON 值 -> 依赖图; 缺少 `slib_analysis` 标记视为格式错误
pub fn from_value(value: Value) -> Result<DependencyGraph> {
    let has_marker = value
        .as_object()
        .map(|o| o.contains_key(MARKER_KEY))
        .unwrap_or(false);
    if !has_marker {
        return Err(SlibError::Format("not an analysis result".to_string()));
    }

    let document: GraphDocument =
        serde_json::from_value(value).map_err(|e| SlibError::Format(e.to_string()))?;

    let mut graph = DependencyGraph::new(&document.library);
    for (filename, entry) in document.content {
        let record = match entry {
            Value::String(s) if s == EMPTY_MARKER => ObjectRecord::empty(&filename),
            Value::Object(_) => serde_json::from_value::<RecordDocument>(entry)
                .map_err(|e| SlibError::Format(format!("{}: {}", filename, e)))?
                .into_record(&filename)?,
            other => {
                return Err(SlibError::Format(format!(
                    "{}: unexpected entry {}",
                    filename, other
                )))
            }
        };
        graph.objects.push(record);
    }

    Ok(graph)
}

/// 序列化为带 4 空格缩进的 JSON 文本
pub fn to_string(graph: &DependencyGraph) -> Result<String> {
    let value = to_value(graph)?;
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| SlibError::Format(e.to_string()))
}

pub fn from_str(text: &str) -> Result<DependencyGraph> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| SlibError::Format(format!("not a valid JSON document: {}", e)))?;
    from_value(value)
}

pub fn save(graph: &DependencyGraph, path: &Path) -> Result<()> {
    let text = to_string(graph)?;
    std::fs::write(path, text).map_err(|e| SlibError::io(path, e))?;
    tracing::info!("Saved {} object files to {}", graph.len(), path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<DependencyGraph> {
    let text = std::fs::read_to_string(path).map_err(|e| SlibError::io(path, e))?;
    from_str(&text)
}
