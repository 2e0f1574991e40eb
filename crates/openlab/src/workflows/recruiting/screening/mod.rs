//! Resume screening: upstream service call with a deterministic local
//! fallback. The client never errors past its boundary.

pub mod client;
pub mod heuristic;
pub mod router;

pub use client::ScreeningClient;
pub use router::screening_router;

/// Extract screenable text from an uploaded resume. Documents are treated as
/// UTF-8 text; undecodable bytes are replaced rather than rejected.
pub fn extract_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}
