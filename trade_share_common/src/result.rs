//! Result type alias shared across the workspace.
//!
//! Functions return `Result<T>`; the error type defaults to `ShareError`.
use crate::error::ShareError;

/// Workspace-wide `Result` alias with `ShareError` as the default error.
pub type Result<T, E = ShareError> = std::result::Result<T, E>;
