// ==========================================
// Learner Record Validation - Cache Layer Errors
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Cache layer error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    // ===== Message holder misuse =====
    #[error("message cache read before population")]
    NotPopulated,

    #[error("message cache already populated; re-set is not permitted within a run")]
    AlreadyPopulated,
}

/// Result alias for the cache layer.
pub type CacheResult<T> = Result<T, CacheError>;
