//! Configuration for warren
//!
//! Settings live in an optional `warren.toml` next to the working
//! directory. CLI flags override config values, which override defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration file name searched for in the working directory
pub const CONFIG_FILE: &str = "warren.toml";

/// Warren configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Traversal engine settings
    #[serde(default)]
    pub explore: ExploreConfig,

    /// Social simulator settings
    #[serde(default)]
    pub social: SocialConfig,
}

/// Settings for the traversal engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// Safety bound multiplier over the room count
    #[serde(default = "default_bound_factor")]
    pub bound_factor: u32,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        ExploreConfig {
            bound_factor: default_bound_factor(),
        }
    }
}

/// Settings for the social simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Number of users to create
    #[serde(default = "default_users")]
    pub users: usize,

    /// Average friendships per user
    #[serde(default = "default_avg_friendships")]
    pub avg_friendships: usize,
}

impl Default for SocialConfig {
    fn default() -> Self {
        SocialConfig {
            users: default_users(),
            avg_friendships: default_avg_friendships(),
        }
    }
}

fn default_bound_factor() -> u32 {
    4
}

fn default_users() -> usize {
    10
}

fn default_avg_friendships() -> usize {
    2
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `warren.toml` under `root`, falling back to defaults when absent
    pub fn discover(root: &Path) -> Result<Config> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Config::load(&path)
        } else {
            Ok(Config::default())
        }
    }
}
