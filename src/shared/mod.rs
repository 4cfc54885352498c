// Shared kernel: error types, logging and text utilities used by every module

pub mod errors; // Shared error types
pub mod infrastructure; // Shared HTTP client plumbing
pub mod utils; // Logging and text normalization
