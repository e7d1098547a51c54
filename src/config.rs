//! Runtime configuration for the command line tool.
//!
//! Values come from the process environment, after an optional `.env` file
//! has been loaded with `dotenv`.

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Default number of siblings printed before the listing is cut off.
pub const DEFAULT_SIBLING_LIMIT: usize = 256;

const ENV_LOG_CONFIG: &str = "NETMASK_LOG_CONFIG";
const ENV_SIBLING_LIMIT: &str = "NETMASK_SIBLING_LIMIT";
const ENV_COLOR: &str = "NETMASK_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Maximum siblings to print. The library iterator itself is unbounded.
    pub sibling_limit: usize,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            sibling_limit: DEFAULT_SIBLING_LIMIT,
            color: true,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the `NETMASK_*` variables.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = path.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_SIBLING_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.sibling_limit = limit,
                Err(e) => log::warn!("Ignoring {ENV_SIBLING_LIMIT}={raw}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_COLOR) {
            match parse_bool(&raw) {
                Some(color) => config.color = color,
                None => log::warn!("Ignoring {ENV_COLOR}={raw}: expected true/false"),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
