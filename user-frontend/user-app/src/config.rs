use leptos::prelude::*;

pub const REMOTE_USERS_URL: &str = "https://easy-simple-users-rest-api.onrender.com/api/users";
pub const LOCAL_USERS_URL: &str = "./data/response.json";

/// Where the widget reads and writes users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub remote_url: String,
    /// Static file served next to the app, read instead of the api when `use_remote` is off.
    pub local_url: String,
    pub use_remote: bool,
    pub api_key_header: String,
    pub api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote_url: REMOTE_USERS_URL.to_string(),
            local_url: LOCAL_USERS_URL.to_string(),
            use_remote: true,
            api_key_header: "my_key".to_string(),
            api_key: "my_super_secret_phrase".to_string(),
        }
    }
}

impl AppConfig {
    pub fn local() -> Self {
        Self {
            use_remote: false,
            ..Self::default()
        }
    }

    /// Url the user list is loaded from.
    pub fn users_url(&self) -> &str {
        if self.use_remote {
            &self.remote_url
        } else {
            &self.local_url
        }
    }

    /// Url edits are sent to. Always the api, even when reads come from the local file.
    pub fn update_url(&self) -> &str {
        &self.remote_url
    }
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_mode_reads_and_writes_the_api() {
        let config = AppConfig::default();
        assert_eq!(config.users_url(), REMOTE_USERS_URL);
        assert_eq!(config.update_url(), REMOTE_USERS_URL);
    }

    #[test]
    fn local_mode_reads_the_static_file() {
        let config = AppConfig::local();
        assert_eq!(config.users_url(), LOCAL_USERS_URL);
        assert_eq!(config.update_url(), REMOTE_USERS_URL);
    }
}
