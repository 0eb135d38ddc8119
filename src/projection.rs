use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::error::{LeagueError, Result};
use crate::fixture::Match;
use crate::simulate::simulate_score;
use crate::standings::{Standing, StandingsTable};
use crate::team::Roster;

/// Project the final table by simulating every unplayed match.
///
/// Played matches count as recorded. Simulated results only ever touch an
/// in-memory table; `matches` is borrowed immutably and is never changed.
/// Calling this repeatedly with a live random source may give a different
/// table each time.
pub fn project_standings<R: Rng>(roster: &Roster, matches: &[Match], rng: &mut R) -> Result<Vec<Standing>> {
    let mut table = StandingsTable::from_played(roster, matches)?;

    for m in matches.iter().filter(|m| !m.played) {
        let home_strength = roster.strength(&m.home_team)?;
        let away_strength = roster.strength(&m.away_team)?;
        let (home_goals, away_goals) = simulate_score(home_strength, away_strength, rng);
        table.record(&m.home_team, &m.away_team, home_goals, away_goals)?;
    }

    Ok(table.ranked())
}

/// Aggregate of many projections for one team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub team_name: String,
    pub mean_points: f64,
    pub points_std_dev: f64,
    /// 1-based
    pub mean_position: f64,
    pub title_probability: f64,
}

/// Run `runs` independent projections and summarize them per team.
///
/// Each run draws from its own `ChaCha8Rng`, seeded from a master generator,
/// so a fixed `seed` gives the same summary regardless of thread scheduling.
/// Results are ordered by mean points, highest first, ties in roster order.
pub fn summarize_projections(
    roster: &Roster,
    matches: &[Match],
    runs: usize,
    seed: Option<u64>,
) -> Result<Vec<ProjectionSummary>> {
    if runs == 0 {
        return Err(LeagueError::NoProjectionRuns);
    }

    let mut master = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let run_seeds: Vec<u64> = (0..runs).map(|_| master.gen::<u64>()).collect();

    let tables = run_seeds
        .par_iter()
        .map(|&run_seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(run_seed);
            project_standings(roster, matches, &mut rng)
        })
        .collect::<Result<Vec<_>>>()?;

    let team_count = roster.len();
    let mut points: Vec<Vec<f64>> = (0..team_count).map(|_| Vec::with_capacity(runs)).collect();
    let mut positions: Vec<Vec<f64>> = (0..team_count).map(|_| Vec::with_capacity(runs)).collect();
    let mut titles = vec![0usize; team_count];

    for table in &tables {
        for (rank, standing) in table.iter().enumerate() {
            let i = roster.position(&standing.team_name)?;
            points[i].push(f64::from(standing.points));
            positions[i].push((rank + 1) as f64);
            if rank == 0 {
                titles[i] += 1;
            }
        }
    }

    let mut summaries: Vec<ProjectionSummary> = roster
        .teams()
        .iter()
        .enumerate()
        .map(|(i, team)| ProjectionSummary {
            team_name: team.name.clone(),
            mean_points: points[i].iter().mean(),
            // Sample std dev is undefined for a single run
            points_std_dev: if runs > 1 { points[i].iter().std_dev() } else { 0.0 },
            mean_position: positions[i].iter().mean(),
            title_probability: titles[i] as f64 / runs as f64,
        })
        .collect();

    summaries.sort_by(|a, b| b.mean_points.total_cmp(&a.mean_points));
    Ok(summaries)
}
