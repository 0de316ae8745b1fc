// ==========================================
// Learner Record Validation - Cache Layer
// ==========================================
// Responsibility: the four per-run cache containers
// Red line: each cache is written by exactly one population step
//           and is read-only for the rest of the run
// ==========================================

pub mod error;
pub mod external_data_cache;
pub mod file_data_cache;
pub mod internal_data_cache;
pub mod message_cache;

pub use error::{CacheError, CacheResult};
pub use external_data_cache::ExternalDataCache;
pub use file_data_cache::FileDataCache;
pub use internal_data_cache::InternalDataCache;
pub use message_cache::MessageCache;
