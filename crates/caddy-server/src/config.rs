//! Server Configuration

use std::path::PathBuf;

use caddy_checkout::DEFAULT_ORIGIN;

/// Settings read from the process environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind_addr: String,

    /// Redirect origin for requests without an `Origin` header
    pub default_origin: String,

    /// Built WASM frontend (index.html, pkg/, assets)
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            default_origin: DEFAULT_ORIGIN.into(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            default_origin: var("DEFAULT_ORIGIN").unwrap_or(defaults.default_origin),
            static_dir: var("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
        }
    }
}
