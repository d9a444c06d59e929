#[cfg(feature = "azure_openai")]
pub mod azure_openai;
