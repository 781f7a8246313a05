//! Environment-driven configuration.
//!
//! Munin hands per-plugin configuration to the process through environment
//! variables set in `plugin-conf.d`, so everything here reads the
//! environment. Nothing is cached; each run is independent.

use std::env;

use crate::error::PluginError;
use crate::instance::{Instance, BASE_NAME};

/// Login name for the serverinfo API (basic auth).
pub const ENV_USERNAME: &str = "username";
/// Password or app token for the serverinfo API (basic auth).
pub const ENV_PASSWORD: &str = "password";
/// Full URL of the serverinfo endpoint.
pub const ENV_URL: &str = "url";
/// Optional explicit instance name; overrides program-name detection.
pub const ENV_INSTANCE: &str = "instance";
/// Munin capability flag requesting data right after the config block.
pub const ENV_DIRTY_CONFIG: &str = "MUNIN_CAP_DIRTYCONFIG";

/// Credentials and endpoint for one data-fetch run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub username: String,
    pub password: String,
    pub url: String,
}

impl Settings {
    /// Read the required fetch settings from the environment.
    pub fn from_env() -> Result<Self, PluginError> {
        Ok(Self {
            username: require(ENV_USERNAME)?,
            password: require(ENV_PASSWORD)?,
            url: require(ENV_URL)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, PluginError> {
    env::var(name).map_err(|_| PluginError::MissingEnv(name))
}

/// True when both credential variables are present, regardless of validity.
///
/// This is all `autoconf` checks; bad credentials only show up at fetch time.
pub fn credentials_present() -> bool {
    env::var(ENV_USERNAME).is_ok() && env::var(ENV_PASSWORD).is_ok()
}

/// True when the collector advertised dirty-config support with the literal `1`.
pub fn dirty_config_enabled() -> bool {
    matches!(env::var(ENV_DIRTY_CONFIG).as_deref(), Ok("1"))
}

/// The instance identity for this run.
///
/// An explicit `instance` variable wins; otherwise the invoked program name
/// decides, for compatibility with installations that disambiguate servers
/// by copy-renaming the plugin file.
pub fn instance_from_env(program_name: &str) -> Instance {
    match env::var(ENV_INSTANCE) {
        Ok(name) if !name.is_empty() => Instance::named(&name),
        _ => Instance::derive(program_name, BASE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so everything that touches
    // them lives in one test to keep the assertions ordered.
    #[test]
    fn test_environment_settings() {
        env::remove_var(ENV_USERNAME);
        env::remove_var(ENV_PASSWORD);
        env::remove_var(ENV_URL);
        env::remove_var(ENV_INSTANCE);
        env::remove_var(ENV_DIRTY_CONFIG);

        assert!(!credentials_present());
        assert_eq!(crate::plugin::autoconf(), crate::plugin::AUTOCONF_MISSING_ENV);
        assert!(!dirty_config_enabled());
        assert!(matches!(
            Settings::from_env(),
            Err(PluginError::MissingEnv("username"))
        ));

        let instance = instance_from_env("nextcloud_users_backup");
        assert_eq!(instance.suffix, "_backup");

        env::set_var(ENV_USERNAME, "munin");
        env::set_var(ENV_PASSWORD, "secret");
        assert!(credentials_present());
        assert_eq!(crate::plugin::autoconf(), "yes");
        assert!(matches!(
            Settings::from_env(),
            Err(PluginError::MissingEnv("url"))
        ));

        // Dirty config with a failing fetch still yields the declarations;
        // only the snapshot is lost.
        env::set_var(ENV_DIRTY_CONFIG, "1");
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        let lines = rt.block_on(crate::plugin::config(
            crate::domain::Domain::Users,
            &Instance::unnamed(),
        ));
        assert_eq!(lines[0], "graph_title Nextcloud User Activity");
        assert!(!lines.iter().any(|l| l.contains(".value ")));
        env::remove_var(ENV_DIRTY_CONFIG);

        env::set_var(ENV_URL, "https://cloud.example.org/ocs/v2.php/apps/serverinfo/api/v1/info");
        let settings = Settings::from_env().expect("all variables set");
        assert_eq!(settings.username, "munin");
        assert_eq!(settings.password, "secret");

        env::set_var(ENV_DIRTY_CONFIG, "0");
        assert!(!dirty_config_enabled());
        env::set_var(ENV_DIRTY_CONFIG, "1");
        assert!(dirty_config_enabled());

        env::set_var(ENV_INSTANCE, "primary");
        let instance = instance_from_env("nextcloud_users_backup");
        assert_eq!(instance.title, " on primary");
        assert_eq!(instance.suffix, "_primary");

        env::remove_var(ENV_USERNAME);
        env::remove_var(ENV_PASSWORD);
        env::remove_var(ENV_URL);
        env::remove_var(ENV_INSTANCE);
        env::remove_var(ENV_DIRTY_CONFIG);
    }
}
