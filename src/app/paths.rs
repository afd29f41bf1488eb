// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins: an explicit override (tests), `--config-dir`,
//! `ICED_PAGER_CONFIG_DIR`, then `<platform config dir>/IcedPager`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedPager";

pub const ENV_CONFIG_DIR: &str = "ICED_PAGER_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::debug!("config dir override already initialized, ignoring");
    }
}

/// Resolves the config directory, or `None` when the platform has none.
pub fn config_dir(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| {
            std::env::var(ENV_CONFIG_DIR)
                .ok()
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below share the process environment
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env<R>(value: Option<&str>, check: impl FnOnce() -> R) -> R {
        let _lock = ENV_MUTEX.lock().unwrap();
        match value {
            Some(value) => std::env::set_var(ENV_CONFIG_DIR, value),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
        let result = check();
        std::env::remove_var(ENV_CONFIG_DIR);
        result
    }

    #[test]
    fn default_dir_is_named_after_the_app() {
        if let Some(dir) = with_env(None, || config_dir(None)) {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn env_var_replaces_default() {
        let dir = with_env(Some("/test/config/dir"), || config_dir(None));
        assert_eq!(dir, Some(PathBuf::from("/test/config/dir")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        if let Some(dir) = with_env(Some(""), || config_dir(None)) {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn override_beats_env_var() {
        let dir = with_env(Some("/env/path"), || {
            config_dir(Some(PathBuf::from("/override/path")))
        });
        assert_eq!(dir, Some(PathBuf::from("/override/path")));
    }
}
