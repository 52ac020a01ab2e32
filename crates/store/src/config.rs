//! Connection settings for the hosted content store.

/// Store connection settings loaded from environment variables.
///
/// The base URL and anonymous key are required: without them neither
/// reads nor storage URLs work, so startup fails immediately. The
/// privileged key is optional because read-only deployments never insert.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `https://xyzcompany.supabase.co`.
    /// Stored without a trailing slash.
    pub url: String,
    /// Anonymous key attached to public reads and storage listings.
    pub anon_key: String,
    /// Privileged key used for inserts. When absent, insert calls return
    /// [`crate::StoreError::Config`] instead of reaching the network.
    pub service_role_key: Option<String>,
}

impl StoreConfig {
    /// Load store settings from the environment.
    ///
    /// | Env Var                     | Required |
    /// |-----------------------------|----------|
    /// | `SUPABASE_URL`              | yes      |
    /// | `SUPABASE_ANON_KEY`         | yes      |
    /// | `SUPABASE_SERVICE_ROLE_KEY` | no       |
    pub fn from_env() -> Self {
        let url = std::env::var("SUPABASE_URL")
            .expect("SUPABASE_URL must be set in the environment");
        assert!(!url.trim().is_empty(), "SUPABASE_URL must not be empty");

        let anon_key = std::env::var("SUPABASE_ANON_KEY")
            .expect("SUPABASE_ANON_KEY must be set in the environment");
        assert!(!anon_key.is_empty(), "SUPABASE_ANON_KEY must not be empty");

        let service_role_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            service_role_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment access is process-global, so everything lives in one
    // test to avoid interleaving with itself under the parallel runner.
    #[test]
    fn from_env_reads_and_normalizes() {
        std::env::set_var("SUPABASE_URL", "https://demo.supabase.co/");
        std::env::set_var("SUPABASE_ANON_KEY", "anon-key");
        std::env::remove_var("SUPABASE_SERVICE_ROLE_KEY");

        let config = StoreConfig::from_env();
        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.anon_key, "anon-key");
        assert_eq!(config.service_role_key, None);

        std::env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-key");
        let config = StoreConfig::from_env();
        assert_eq!(config.service_role_key.as_deref(), Some("service-key"));

        std::env::set_var("SUPABASE_SERVICE_ROLE_KEY", "");
        let config = StoreConfig::from_env();
        assert_eq!(config.service_role_key, None);
    }
}
