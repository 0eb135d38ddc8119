//! League Core - Round-robin league simulation engine.
//!
//! Generates fixtures for a fixed roster, simulates match scores from team
//! strength ratings, and ranks teams in a standings table. Remaining
//! fixtures can be projected without touching recorded results.
//!
//! Python bindings via PyO3 are available with the `python` feature.

pub mod config;
pub mod constants;
pub mod error;
pub mod fixture;
pub mod league;
pub mod projection;
pub mod simulate;
pub mod standings;
pub mod team;

#[cfg(feature = "python")]
pub mod python;

pub use config::LeagueConfig;
pub use constants::{DEFAULT_WEEKS, GOAL_STRENGTH_DIVISOR, HOME_ADVANTAGE, POINTS_FOR_DRAW, POINTS_FOR_WIN};
pub use error::{ErrorKind, LeagueError, Result};
pub use fixture::{generate_fixtures, Match};
pub use league::League;
pub use projection::{project_standings, summarize_projections, ProjectionSummary};
pub use simulate::{goal_ceiling, simulate_pending, simulate_score};
pub use standings::{calculate_standings, compare_standings, Standing, StandingsTable};
pub use team::{Roster, Team};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn league_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<python::PyLeague>()?;

    // Functions
    m.add_function(wrap_pyfunction!(python::py_simulate_score, m)?)?;

    // Constants
    m.add("HOME_ADVANTAGE", HOME_ADVANTAGE)?;
    m.add("GOAL_STRENGTH_DIVISOR", GOAL_STRENGTH_DIVISOR)?;
    m.add("POINTS_FOR_WIN", POINTS_FOR_WIN)?;
    m.add("POINTS_FOR_DRAW", POINTS_FOR_DRAW)?;
    m.add("DEFAULT_WEEKS", DEFAULT_WEEKS)?;

    Ok(())
}
