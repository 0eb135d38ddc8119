//! Python bindings.
//!
//! Table and match data is returned as JSON strings in the same shape the
//! web layer serves, so the Python side can pass it straight through.

use pyo3::exceptions::{PyIndexError, PyKeyError, PyValueError};
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::LeagueConfig;
use crate::constants::DEFAULT_WEEKS;
use crate::error::{ErrorKind, LeagueError};
use crate::league::League;
use crate::simulate::simulate_score;
use crate::team::Team;

impl From<LeagueError> for PyErr {
    fn from(err: LeagueError) -> PyErr {
        match err.kind() {
            ErrorKind::Configuration => PyValueError::new_err(err.to_string()),
            ErrorKind::Referential => PyKeyError::new_err(err.to_string()),
            ErrorKind::Range => PyIndexError::new_err(err.to_string()),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(format!("Failed to encode JSON: {}", e)))
}

/// Week number from Python, which may be negative.
fn week_arg(week: i64, total_weeks: u32) -> Result<u32, LeagueError> {
    u32::try_from(week).map_err(|_| LeagueError::WeekOutOfRange { week, total_weeks })
}

/// Simulate one score.
///
/// Uses a fresh generator per call; pass `seed` for a reproducible draw.
#[pyfunction]
#[pyo3(name = "simulate_score", signature = (home_strength, away_strength, seed = None))]
pub fn py_simulate_score(home_strength: u32, away_strength: u32, seed: Option<u64>) -> (u32, u32) {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    simulate_score(home_strength, away_strength, &mut rng)
}

/// League handle for Python callers.
#[pyclass(name = "League")]
pub struct PyLeague {
    inner: League,
}

#[pymethods]
impl PyLeague {
    /// Create a league from `(name, strength)` pairs.
    ///
    /// Without `teams` the default four-team roster is used.
    #[new]
    #[pyo3(signature = (teams = None, weeks = DEFAULT_WEEKS, seed = None))]
    pub fn new(teams: Option<Vec<(String, u32)>>, weeks: u32, seed: Option<u64>) -> PyResult<Self> {
        let mut config = match teams {
            Some(teams) => LeagueConfig::new(
                teams.into_iter().map(|(name, strength)| Team::new(name, strength)).collect(),
                weeks,
            ),
            None => LeagueConfig {
                weeks,
                ..LeagueConfig::default()
            },
        };
        config.seed = seed;

        Ok(PyLeague {
            inner: League::new(config)?,
        })
    }

    /// Create a league from a TOML configuration file.
    #[staticmethod]
    pub fn from_config_file(filepath: &str) -> PyResult<Self> {
        let config = LeagueConfig::read_from_file(filepath)?;
        Ok(PyLeague {
            inner: League::new(config)?,
        })
    }

    #[getter]
    pub fn weeks(&self) -> u32 {
        self.inner.weeks()
    }

    pub fn teams(&self) -> PyResult<String> {
        to_json(self.inner.teams())
    }

    /// All matches, or only those of `week`.
    #[pyo3(signature = (week = None))]
    pub fn matches(&self, week: Option<i64>) -> PyResult<String> {
        match week {
            Some(w) => {
                let w = week_arg(w, self.inner.weeks())?;
                to_json(&self.inner.matches_in_week(w)?)
            }
            None => to_json(self.inner.matches()),
        }
    }

    pub fn simulate_week(&mut self, week: i64) -> PyResult<usize> {
        let week = week_arg(week, self.inner.weeks())?;
        Ok(self.inner.simulate_week(week)?)
    }

    pub fn simulate_all(&mut self) -> PyResult<usize> {
        Ok(self.inner.simulate_all_remaining()?)
    }

    pub fn simulate_match(&mut self, match_id: usize) -> PyResult<(u32, u32)> {
        Ok(self.inner.simulate_match(match_id)?)
    }

    pub fn update_match_result(&mut self, match_id: usize, home_goals: i64, away_goals: i64) -> PyResult<()> {
        Ok(self.inner.update_match_result(match_id, home_goals, away_goals)?)
    }

    pub fn regenerate_fixtures(&mut self) -> PyResult<usize> {
        Ok(self.inner.generate_fixtures()?)
    }

    pub fn standings(&self) -> PyResult<String> {
        to_json(&self.inner.standings()?)
    }

    pub fn projected_standings(&mut self) -> PyResult<String> {
        to_json(&self.inner.projected_standings()?)
    }

    #[pyo3(signature = (runs, seed = None))]
    pub fn projection_summary(&mut self, runs: usize, seed: Option<u64>) -> PyResult<String> {
        to_json(&self.inner.projection_summary(runs, seed)?)
    }

    fn __repr__(&self) -> String {
        format!(
            "League({} teams, {} weeks, {}/{} played)",
            self.inner.teams().len(),
            self.inner.weeks(),
            self.inner.played_count(),
            self.inner.matches().len()
        )
    }
}
