mod app;
mod azure;
mod chat;
mod logging;
mod search;

const DEFAULT_HISTORY_DISPLAY: usize = 10;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

pub use app::AppConfig;
pub use azure::AzureConfig;
pub use chat::ChatConfig;
pub use logging::LoggingConfig;
pub use search::SearchConfig;
