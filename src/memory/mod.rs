mod store;

pub use store::ConversationStore;
