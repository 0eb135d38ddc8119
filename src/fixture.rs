use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};
use crate::team::Team;

/// A scheduled match and, once played, its result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: usize,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub played: bool,
    pub week: u32,
}

impl Match {
    /// Create an unplayed fixture.
    pub fn scheduled(id: usize, home_team: &str, away_team: &str, week: u32) -> Self {
        Match {
            id,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_goals: 0,
            away_goals: 0,
            played: false,
            week,
        }
    }

    /// Record a result and mark the match played.
    pub fn record(&mut self, home_goals: u32, away_goals: u32) {
        self.home_goals = home_goals;
        self.away_goals = away_goals;
        self.played = true;
    }
}

/// Week for the pairing of the teams at roster positions `home` and `away`.
///
/// Weeks are 1-based and wrap over `weeks`. Several matches may share a
/// week, including two involving the same team.
pub(crate) fn assign_week(home: usize, away: usize, weeks: u32) -> u32 {
    let week = ((home + away) % weeks as usize) as u32;
    if week == 0 {
        weeks
    } else {
        week
    }
}

/// Generate every ordered (home, away) pairing of distinct teams.
///
/// Matches are produced home-major in roster order with ids starting at 1,
/// so the same roster and week count always yield the same list.
pub fn generate_fixtures(teams: &[Team], weeks: u32) -> Result<Vec<Match>> {
    if teams.len() < 2 {
        return Err(LeagueError::TooFewTeams { count: teams.len() });
    }
    if weeks < 1 {
        return Err(LeagueError::InvalidWeekCount { weeks });
    }

    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1));
    for (i, home) in teams.iter().enumerate() {
        for (j, away) in teams.iter().enumerate() {
            if i == j {
                continue;
            }
            let id = matches.len() + 1;
            matches.push(Match::scheduled(id, &home.name, &away.name, assign_week(i, j, weeks)));
        }
    }

    Ok(matches)
}
