//! The client configuration compiled into the bundle.

use std::sync::OnceLock;

use store::EasyPgConfig;

const EMBEDDED: &str = include_str!("../../../easypg.toml");

/// Parsed `easypg.toml`. A file that fails to parse falls back to defaults.
pub fn app_config() -> &'static EasyPgConfig {
    static CONFIG: OnceLock<EasyPgConfig> = OnceLock::new();
    CONFIG.get_or_init(|| match EasyPgConfig::from_toml(EMBEDDED) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                error = %e,
                file = EasyPgConfig::filename(),
                "Invalid config, using defaults"
            );
            EasyPgConfig::default()
        }
    })
}
