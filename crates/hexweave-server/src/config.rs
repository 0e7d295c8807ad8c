//! Server configuration.

use hexweave_lattice::{KeyStyle, Pattern};

/// Startup configuration for the facade.
///
/// Everything has a default; [`ServerConfig::from_env`] only overrides
/// the handful of knobs operators actually touch.
#[derive(Clone, Copy, Debug)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Side length of the initial lattice.
    pub size: u16,
    /// Seed pattern of the initial lattice.
    pub pattern: Pattern,
    /// Wire key style for snapshots (`q`/`r` when legacy clients are
    /// still around).
    pub key_style: KeyStyle,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            size: 10,
            pattern: Pattern::Vertical,
            key_style: KeyStyle::Canonical,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden from the environment: `PORT` and
    /// `HEXWEAVE_LEGACY_KEYS` (`1` or `true` switches the wire format
    /// to the legacy `q`/`r` field names).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            config.port = port;
        }
        if let Ok(flag) = std::env::var("HEXWEAVE_LEGACY_KEYS") {
            if flag == "1" || flag.eq_ignore_ascii_case("true") {
                config.key_style = KeyStyle::Legacy;
            }
        }
        config
    }
}
