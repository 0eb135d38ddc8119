use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::{MAX_STRENGTH, MIN_STRENGTH};
use crate::error::{LeagueError, Result};

/// Team with a single strength rating.
///
/// Strength drives the goal ceiling in the outcome simulator; see
/// [`crate::simulate::goal_ceiling`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,

    /// Rating in `MIN_STRENGTH..=MAX_STRENGTH`
    pub strength: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, strength: u32) -> Self {
        Team {
            name: name.into(),
            strength,
        }
    }
}

/// Ordered, validated set of teams.
///
/// Roster order is significant: it feeds the fixture week formula and is
/// the final tie-break in the standings.
#[derive(Clone, Debug)]
pub struct Roster {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster, rejecting duplicate names and out-of-range strengths.
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let mut index = HashMap::with_capacity(teams.len());
        for (i, team) in teams.iter().enumerate() {
            if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&team.strength) {
                return Err(LeagueError::StrengthOutOfRange {
                    name: team.name.clone(),
                    strength: team.strength,
                    min: MIN_STRENGTH,
                    max: MAX_STRENGTH,
                });
            }
            if index.insert(team.name.clone(), i).is_some() {
                return Err(LeagueError::DuplicateTeam {
                    name: team.name.clone(),
                });
            }
        }
        Ok(Roster { teams, index })
    }

    /// Read a roster from a CSV file.
    /// Format: name,strength
    pub fn read_from_file(filepath: impl AsRef<Path>) -> Result<Self> {
        Self::new(read_teams_csv(filepath)?)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Position of a team in roster order.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| LeagueError::UnknownTeam {
                name: name.to_string(),
            })
    }

    pub fn get(&self, name: &str) -> Result<&Team> {
        self.position(name).map(|i| &self.teams[i])
    }

    pub fn strength(&self, name: &str) -> Result<u32> {
        self.get(name).map(|team| team.strength)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

/// Read `name,strength` lines from a CSV file without validating the roster.
pub fn read_teams_csv(filepath: impl AsRef<Path>) -> Result<Vec<Team>> {
    let path = filepath.as_ref();
    let file = File::open(path).map_err(|source| LeagueError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| LeagueError::Io {
            path: path.display().to_string(),
            source,
        })?;
        lines.push(line);
    }
    parse_teams_csv(&lines.join("\n"))
}

/// Parse `name,strength` lines. Blank lines are skipped; anything else that
/// does not have exactly two fields is rejected.
pub fn parse_teams_csv(contents: &str) -> Result<Vec<Team>> {
    let mut teams = Vec::new();

    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 2 {
            return Err(LeagueError::Config(format!(
                "roster line {}: expected `name,strength`, got {:?}",
                lineno + 1,
                line
            )));
        }

        let name = parts[0].trim();
        if name.is_empty() {
            return Err(LeagueError::Config(format!(
                "roster line {}: empty team name",
                lineno + 1
            )));
        }
        let strength: u32 = parts[1].trim().parse().map_err(|e| {
            LeagueError::Config(format!("roster line {}: invalid strength: {}", lineno + 1, e))
        })?;

        teams.push(Team::new(name, strength));
    }

    Ok(teams)
}
