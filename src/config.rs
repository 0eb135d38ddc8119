//! League configuration
//!
//! A league is configured once: its roster, season length and an optional
//! seed for the simulation random source. Configuration can come from a
//! TOML file, a CSV roster, or the built-in defaults.
//!
//! ```toml
//! weeks = 6
//! seed = 42
//!
//! [[teams]]
//! name = "Alpha FC"
//! strength = 85
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_ROSTER, DEFAULT_WEEKS};
use crate::error::{LeagueError, Result};
use crate::team::{read_teams_csv, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Number of weeks fixtures are spread over
    #[serde(default = "default_weeks")]
    pub weeks: u32,

    /// Seed for the simulation random source; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Teams in roster order
    pub teams: Vec<Team>,
}

fn default_weeks() -> u32 {
    DEFAULT_WEEKS
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig {
            weeks: DEFAULT_WEEKS,
            seed: None,
            teams: DEFAULT_ROSTER
                .iter()
                .map(|&(name, strength)| Team::new(name, strength))
                .collect(),
        }
    }
}

impl LeagueConfig {
    pub fn new(teams: Vec<Team>, weeks: u32) -> Self {
        LeagueConfig {
            weeks,
            seed: None,
            teams,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| LeagueError::Config(e.to_string()))
    }

    pub fn read_from_file(filepath: impl AsRef<Path>) -> Result<Self> {
        let path = filepath.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LeagueError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Default season length with the roster read from a `name,strength` CSV.
    pub fn from_roster_csv(filepath: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_teams_csv(filepath)?, DEFAULT_WEEKS))
    }
}
