// ============================================================================
// Plugin Log
// ============================================================================
//
// Records shown to the shop administrator, separate from the `tracing`
// diagnostics of the process itself.
//
// ============================================================================

pub mod record;
pub mod logger;

pub use record::{Record, RecordAction, RecordStatus};
pub use logger::{Logger, TracingLogger};

#[cfg(test)]
pub use logger::MemoryLogger;
