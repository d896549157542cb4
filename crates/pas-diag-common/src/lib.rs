//! Common infrastructure for OPX PAS diagnostic tools.
//!
//! This crate provides shared functionality for the platform adaptation
//! service (PAS) diagnostics in the Rust rewrite:
//!
//! - [`shell`]: Safe shell command execution with proper quoting
//! - [`error`]: Error types for diagnostic operations
//!
//! # Architecture
//!
//! PAS diagnostics follow this pattern:
//!
//! 1. Invoke a platform CLI tool (transceiver summary, CPS object get)
//! 2. Parse its line-oriented text output into explicit record types
//! 3. Compare observed hardware state against the detected physical state
//! 4. Report pass/fail through stdout and the process exit code
//!
//! # Example
//!
//! ```ignore
//! use pas_diag_common::{
//!     shell::{self, CPS_GET_CMD, shellquote},
//!     error::DiagResult,
//! };
//!
//! async fn query_media(port: &str) -> DiagResult<String> {
//!     let cmd = format!("{} observed/base-pas/media port={}",
//!         CPS_GET_CMD, shellquote(port));
//!     shell::exec_or_throw(&cmd).await
//! }
//! ```

pub mod error;
pub mod shell;

// Re-export commonly used items at crate root
pub use error::{DiagError, DiagResult};
