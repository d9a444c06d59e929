use super::types::AppConfig;

pub(super) const AZURE_ENDPOINT: &str = "AZURE_ENDPOINT";
pub(super) const AZURE_DEPLOYMENT_NAME: &str = "AZURE_DEPLOYMENT_NAME";
pub(super) const SUBSCRIPTION_KEY: &str = "SUBSCRIPTION_KEY";
pub(super) const SEARCH_ENDPOINT: &str = "SEARCH_ENDPOINT";
pub(super) const SEARCH_KEY: &str = "SEARCH_KEY";
pub(super) const SEARCH_INDEX: &str = "SEARCH_INDEX";

impl AppConfig {
    /// Environment values win over the file. Blank values are ignored.
    pub(super) fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let overrides = [
            (AZURE_ENDPOINT, &mut self.azure.endpoint),
            (AZURE_DEPLOYMENT_NAME, &mut self.azure.deployment),
            (SUBSCRIPTION_KEY, &mut self.azure.api_key),
            (SEARCH_ENDPOINT, &mut self.search.endpoint),
            (SEARCH_KEY, &mut self.search.key),
            (SEARCH_INDEX, &mut self.search.index),
        ];
        for (name, slot) in overrides {
            if let Some(value) = read(name) {
                log::debug!("config value taken from ${name}");
                *slot = Some(value);
            }
        }
    }
}
