//! Text generation provider clients

pub mod eden;

// Re-export for convenience
pub use eden::EdenClient;
