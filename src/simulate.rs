use rand::Rng;

use crate::constants::{GOAL_STRENGTH_DIVISOR, HOME_ADVANTAGE};
use crate::error::Result;
use crate::fixture::Match;
use crate::team::Roster;

/// Highest number of goals a side with this effective strength can score.
pub fn goal_ceiling(strength: u32) -> u32 {
    strength / GOAL_STRENGTH_DIVISOR
}

/// Simulate the score of a single match.
///
/// Each side's goals are drawn uniformly from `0..=ceiling`, where the home
/// ceiling includes [`HOME_ADVANTAGE`]. A ceiling of 0 always yields 0 goals.
///
/// # Arguments
/// * `home_strength` - Strength of the home team
/// * `away_strength` - Strength of the away team
/// * `rng` - Random source; pass a seeded generator for reproducible results
///
/// # Returns
/// (home_goals, away_goals)
pub fn simulate_score<R: Rng>(home_strength: u32, away_strength: u32, rng: &mut R) -> (u32, u32) {
    let home_goals = rng.gen_range(0..=goal_ceiling(home_strength.saturating_add(HOME_ADVANTAGE)));
    let away_goals = rng.gen_range(0..=goal_ceiling(away_strength));
    (home_goals, away_goals)
}

/// Simulate and record every unplayed match, optionally limited to one week.
///
/// Matches are simulated in week order. All outcomes are drawn before any
/// match is written, so a failed strength lookup leaves `matches` exactly as
/// it was. Returns the number of matches recorded.
pub fn simulate_pending<R: Rng>(
    roster: &Roster,
    matches: &mut [Match],
    week: Option<u32>,
    rng: &mut R,
) -> Result<usize> {
    let mut pending: Vec<usize> = matches
        .iter()
        .enumerate()
        .filter(|(_, m)| !m.played && week.map_or(true, |w| m.week == w))
        .map(|(i, _)| i)
        .collect();
    pending.sort_by_key(|&i| matches[i].week);

    let mut staged = Vec::with_capacity(pending.len());
    for i in pending {
        let m = &matches[i];
        let home_strength = roster.strength(&m.home_team)?;
        let away_strength = roster.strength(&m.away_team)?;
        staged.push((i, simulate_score(home_strength, away_strength, rng)));
    }

    for &(i, (home_goals, away_goals)) in &staged {
        matches[i].record(home_goals, away_goals);
    }
    Ok(staged.len())
}
