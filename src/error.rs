//! Error types for the league engine

use thiserror::Error;

/// Broad category of a [`LeagueError`], for callers that map failures to
/// transport-level statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid roster, week count or other setup input
    Configuration,
    /// A team or match reference that does not resolve
    Referential,
    /// A value outside its permitted range
    Range,
}

/// Errors that can occur while configuring or running a league
#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("a league needs at least 2 teams, got {count}")]
    TooFewTeams { count: usize },

    #[error("a league needs at least 1 week, got {weeks}")]
    InvalidWeekCount { weeks: u32 },

    #[error("team {name:?} appears more than once in the roster")]
    DuplicateTeam { name: String },

    #[error("team {name:?} has strength {strength}, expected {min}..={max}")]
    StrengthOutOfRange {
        name: String,
        strength: u32,
        min: u32,
        max: u32,
    },

    #[error("projection summary needs at least one run")]
    NoProjectionRuns,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("team {name:?} is not in the roster")]
    UnknownTeam { name: String },

    #[error("no match with id {id}")]
    UnknownMatch { id: usize },

    #[error("week {week} is outside 1..={total_weeks}")]
    WeekOutOfRange { week: i64, total_weeks: u32 },

    #[error("goal counts must be between 0 and {max} (got {home_goals}-{away_goals})")]
    GoalsOutOfRange {
        home_goals: i64,
        away_goals: i64,
        max: u32,
    },

    #[error("match {id} has already been played")]
    AlreadyPlayed { id: usize },

    #[error("match {id} has {team:?} playing itself")]
    SelfMatch { id: usize, team: String },

    #[error("match id {id} appears more than once")]
    DuplicateMatchId { id: usize },

    #[error("{home_team:?} vs {away_team:?} appears more than once")]
    DuplicateFixture { home_team: String, away_team: String },
}

impl LeagueError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeagueError::TooFewTeams { .. }
            | LeagueError::InvalidWeekCount { .. }
            | LeagueError::DuplicateTeam { .. }
            | LeagueError::StrengthOutOfRange { .. }
            | LeagueError::NoProjectionRuns
            | LeagueError::Config(_)
            | LeagueError::Io { .. } => ErrorKind::Configuration,
            LeagueError::UnknownTeam { .. }
            | LeagueError::UnknownMatch { .. }
            | LeagueError::SelfMatch { .. }
            | LeagueError::DuplicateMatchId { .. }
            | LeagueError::DuplicateFixture { .. } => ErrorKind::Referential,
            LeagueError::WeekOutOfRange { .. }
            | LeagueError::GoalsOutOfRange { .. }
            | LeagueError::AlreadyPlayed { .. } => ErrorKind::Range,
        }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(LeagueError::TooFewTeams { count: 1 }.kind(), ErrorKind::Configuration);
        assert_eq!(
            LeagueError::UnknownTeam { name: "X".to_string() }.kind(),
            ErrorKind::Referential
        );
        assert_eq!(LeagueError::UnknownMatch { id: 99 }.kind(), ErrorKind::Referential);
        assert_eq!(
            LeagueError::WeekOutOfRange { week: 0, total_weeks: 6 }.kind(),
            ErrorKind::Range
        );
        assert_eq!(
            LeagueError::GoalsOutOfRange { home_goals: -1, away_goals: 0, max: 9 }.kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_messages() {
        let err = LeagueError::WeekOutOfRange { week: 7, total_weeks: 6 };
        assert_eq!(err.to_string(), "week 7 is outside 1..=6");
    }
}
