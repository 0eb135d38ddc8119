use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::constants::{POINTS_FOR_DRAW, POINTS_FOR_WIN};
use crate::error::Result;
use crate::fixture::Match;
use crate::team::Roster;

/// One team's season-to-date record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// goals_for - goals_against
    pub goal_difference: i64,
    pub points: u32,
}

impl Standing {
    pub fn new(team_name: impl Into<String>) -> Self {
        Standing {
            team_name: team_name.into(),
            ..Default::default()
        }
    }

    /// Add one match from this team's point of view.
    fn apply(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
            }
            Ordering::Less => self.losses += 1,
            Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
            }
        }
    }

    fn refresh_goal_difference(&mut self) {
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
    }
}

/// Ranking order: points descending, then goal difference descending.
///
/// Entries equal on both keys compare equal, so a stable sort keeps them in
/// their incoming (roster) order.
pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
}

/// Refresh goal differences and sort into ranking order.
pub fn rank_standings(standings: &mut [Standing]) {
    for standing in standings.iter_mut() {
        standing.refresh_goal_difference();
    }
    standings.sort_by(compare_standings);
}

/// Unranked, in-progress standings with one row per roster team.
///
/// Rows stay in roster order until [`StandingsTable::ranked`] is called, so
/// a table can be cloned and extended with hypothetical results.
#[derive(Clone, Debug)]
pub struct StandingsTable<'a> {
    roster: &'a Roster,
    rows: Vec<Standing>,
}

impl<'a> StandingsTable<'a> {
    /// All-zero table covering the whole roster.
    pub fn new(roster: &'a Roster) -> Self {
        let rows = roster.teams().iter().map(|t| Standing::new(t.name.as_str())).collect();
        StandingsTable { roster, rows }
    }

    /// Table built from every played match; unplayed matches are ignored.
    pub fn from_played(roster: &'a Roster, matches: &[Match]) -> Result<Self> {
        let mut table = Self::new(roster);
        for m in matches.iter().filter(|m| m.played) {
            table.record(&m.home_team, &m.away_team, m.home_goals, m.away_goals)?;
        }
        Ok(table)
    }

    /// Fold a single result into the table.
    ///
    /// Both team names are resolved before anything is updated, so an
    /// unknown team leaves the table untouched.
    pub fn record(&mut self, home_team: &str, away_team: &str, home_goals: u32, away_goals: u32) -> Result<()> {
        let home = self.roster.position(home_team)?;
        let away = self.roster.position(away_team)?;

        self.rows[home].apply(home_goals, away_goals);
        self.rows[away].apply(away_goals, home_goals);
        Ok(())
    }

    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    /// Rows in roster order, goal differences not yet refreshed.
    pub fn rows(&self) -> &[Standing] {
        &self.rows
    }

    /// Finish the table: compute goal differences and sort.
    pub fn ranked(self) -> Vec<Standing> {
        let mut rows = self.rows;
        rank_standings(&mut rows);
        rows
    }
}

/// Compute the ranked standings from the played matches.
///
/// Every roster team appears, including teams without a played match.
pub fn calculate_standings(roster: &Roster, matches: &[Match]) -> Result<Vec<Standing>> {
    Ok(StandingsTable::from_played(roster, matches)?.ranked())
}
