pub mod chat;
pub mod context;
pub mod gemini;

pub use chat::{ChatMessage, ChatRole};
pub use context::context_summary;
pub use gemini::GeminiAssistant;
