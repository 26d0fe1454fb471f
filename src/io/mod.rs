/// Command-line interface and batch playout runner
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types for engine and command-line operations
pub mod error;
/// Batch progress display
pub mod progress;
