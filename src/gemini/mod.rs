pub mod client;
pub mod error;
pub mod sources;
pub mod traits;
pub mod types;

pub use client::GeminiClient;
pub use error::GenerationError;
pub use sources::extract_grounding_sources;
pub use traits::GenerationClient;
pub use types::{GenerateContentResponse, GenerationOptions};
