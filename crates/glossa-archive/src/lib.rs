//! ZIP extraction into an ephemeral workspace.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Entry path validation (zip-slip prevention)
//! - `extract.rs` - Streaming ZIP extraction
//! - `workspace.rs` - Temp-dir ownership with unconditional cleanup

pub use error::{Error, Result};
pub use extract::{ExtractReport, extract_zip};
pub use sanitize::{SanitizedPath, sanitize_entry_path};
pub use workspace::Workspace;

mod error;
mod extract;
mod sanitize;
mod workspace;
