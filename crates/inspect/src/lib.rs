mod adapters;
mod process;

pub use adapters::{ArchiveInspector, BinutilsInspector};
pub use process::{run_tool, InspectError, Result};
