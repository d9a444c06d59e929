mod conversation;
mod display;
mod persona;


pub use conversation::ConversationEngine;
pub use display::{Advisory, DisplayResult, DEFAULT_RETRY_AFTER};
pub use persona::{DEFAULT_PERSONA, FALLBACK_MESSAGE};
