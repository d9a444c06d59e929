mod sanitize;
mod traits;
mod turn;

pub use sanitize::strip_citations;
pub use traits::GroundedChatProvider;
pub use turn::{Role, Turn};
