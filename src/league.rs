use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use std::collections::HashSet;

use crate::config::LeagueConfig;
use crate::constants::MAX_GOALS;
use crate::error::{LeagueError, Result};
use crate::fixture::{generate_fixtures, Match};
use crate::projection::{project_standings, summarize_projections, ProjectionSummary};
use crate::simulate::{simulate_pending, simulate_score};
use crate::standings::{calculate_standings, Standing};
use crate::team::{Roster, Team};

/// League state: roster, season length, fixtures and the simulation RNG.
///
/// The RNG is seeded once per league (from the configured seed, or from
/// entropy) and shared by every simulation and projection call.
#[derive(Clone, Debug)]
pub struct League {
    roster: Roster,
    weeks: u32,
    matches: Vec<Match>,
    rng: ChaCha8Rng,
}

impl League {
    /// Create a league and generate its fixtures.
    pub fn new(config: LeagueConfig) -> Result<Self> {
        let mut league = Self::configure(config)?;
        league.generate_fixtures()?;
        Ok(league)
    }

    /// Create a league around match records loaded from storage.
    ///
    /// Every match must name two different roster teams, lie within the
    /// season and carry goal counts within `MAX_GOALS`. Ids and ordered
    /// (home, away) pairs must be unique.
    pub fn with_matches(config: LeagueConfig, matches: Vec<Match>) -> Result<Self> {
        let mut league = Self::configure(config)?;
        let mut ids = HashSet::with_capacity(matches.len());
        let mut pairs = HashSet::with_capacity(matches.len());
        for m in &matches {
            league.roster.position(&m.home_team)?;
            league.roster.position(&m.away_team)?;
            league.check_week(m.week)?;
            if m.home_team == m.away_team {
                return Err(LeagueError::SelfMatch {
                    id: m.id,
                    team: m.home_team.clone(),
                });
            }
            if !ids.insert(m.id) {
                return Err(LeagueError::DuplicateMatchId { id: m.id });
            }
            if !pairs.insert((m.home_team.as_str(), m.away_team.as_str())) {
                return Err(LeagueError::DuplicateFixture {
                    home_team: m.home_team.clone(),
                    away_team: m.away_team.clone(),
                });
            }
            check_goals(i64::from(m.home_goals), i64::from(m.away_goals))?;
        }
        league.matches = matches;
        Ok(league)
    }

    fn configure(config: LeagueConfig) -> Result<Self> {
        if config.teams.len() < 2 {
            return Err(LeagueError::TooFewTeams {
                count: config.teams.len(),
            });
        }
        if config.weeks < 1 {
            return Err(LeagueError::InvalidWeekCount { weeks: config.weeks });
        }

        let roster = Roster::new(config.teams)?;
        let rng = match config.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(League {
            roster,
            weeks: config.weeks,
            matches: Vec::new(),
            rng,
        })
    }

    /// Discard all matches and rebuild the fixture list.
    ///
    /// Returns the number of generated matches.
    pub fn generate_fixtures(&mut self) -> Result<usize> {
        let fixtures = generate_fixtures(self.roster.teams(), self.weeks)?;
        if self.matches.iter().any(|m| m.played) {
            tracing::warn!("Regenerating fixtures discards {} played matches", self.played_count());
        }
        self.matches = fixtures;
        tracing::info!(
            "Generated {} fixtures for {} teams over {} weeks",
            self.matches.len(),
            self.roster.len(),
            self.weeks
        );
        Ok(self.matches.len())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn teams(&self) -> &[Team] {
        self.roster.teams()
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn matches_in_week(&self, week: u32) -> Result<Vec<&Match>> {
        self.check_week(week)?;
        Ok(self.matches.iter().filter(|m| m.week == week).collect())
    }

    pub fn get_match(&self, id: usize) -> Result<&Match> {
        self.match_index(id).map(|i| &self.matches[i])
    }

    pub fn played_count(&self) -> usize {
        self.matches.iter().filter(|m| m.played).count()
    }

    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(|m| m.played)
    }

    /// Simulate every unplayed match in `week`.
    ///
    /// Returns the number of matches simulated; 0 if the week was already
    /// complete.
    pub fn simulate_week(&mut self, week: u32) -> Result<usize> {
        self.check_week(week)?;
        let simulated = simulate_pending(&self.roster, &mut self.matches, Some(week), &mut self.rng)?;
        tracing::info!("Simulated {} matches in week {}", simulated, week);
        Ok(simulated)
    }

    /// Simulate every unplayed match in the season, week by week.
    pub fn simulate_all_remaining(&mut self) -> Result<usize> {
        let simulated = simulate_pending(&self.roster, &mut self.matches, None, &mut self.rng)?;
        tracing::info!("Simulated {} remaining matches", simulated);
        Ok(simulated)
    }

    /// Simulate a single unplayed match.
    ///
    /// Returns (home_goals, away_goals).
    pub fn simulate_match(&mut self, id: usize) -> Result<(u32, u32)> {
        let i = self.match_index(id)?;
        if self.matches[i].played {
            return Err(LeagueError::AlreadyPlayed { id });
        }

        let home_strength = self.roster.strength(&self.matches[i].home_team)?;
        let away_strength = self.roster.strength(&self.matches[i].away_team)?;
        let (home_goals, away_goals) = simulate_score(home_strength, away_strength, &mut self.rng);

        let m = &mut self.matches[i];
        m.record(home_goals, away_goals);
        tracing::debug!(
            "Simulated match {}: {} {}-{} {}",
            id,
            m.home_team,
            home_goals,
            away_goals,
            m.away_team
        );
        Ok((home_goals, away_goals))
    }

    /// Manually set a match result, played or not.
    ///
    /// Each goal count must lie in `0..=MAX_GOALS`.
    pub fn update_match_result(&mut self, id: usize, home_goals: i64, away_goals: i64) -> Result<()> {
        let (home, away) = check_goals(home_goals, away_goals)?;

        let i = self.match_index(id)?;
        let m = &mut self.matches[i];
        let replaced = m.played;
        m.record(home, away);
        tracing::info!(
            "{} match {}: {} {}-{} {}",
            if replaced { "Overrode" } else { "Recorded" },
            id,
            m.home_team,
            home,
            away,
            m.away_team
        );
        Ok(())
    }

    /// Current table from played matches.
    pub fn standings(&self) -> Result<Vec<Standing>> {
        calculate_standings(&self.roster, &self.matches)
    }

    /// Projected final table; match state is left untouched.
    pub fn projected_standings(&mut self) -> Result<Vec<Standing>> {
        let remaining = self.matches.len() - self.played_count();
        tracing::debug!("Projecting {} remaining matches", remaining);
        project_standings(&self.roster, &self.matches, &mut self.rng)
    }

    /// Summarize `runs` projections of the remaining season.
    ///
    /// Without an explicit seed the runs are seeded from the league RNG.
    pub fn projection_summary(&mut self, runs: usize, seed: Option<u64>) -> Result<Vec<ProjectionSummary>> {
        let seed = seed.unwrap_or_else(|| self.rng.gen::<u64>());
        tracing::debug!("Running {} projections with seed {}", runs, seed);
        summarize_projections(&self.roster, &self.matches, runs, Some(seed))
    }

    fn check_week(&self, week: u32) -> Result<()> {
        if week < 1 || week > self.weeks {
            return Err(LeagueError::WeekOutOfRange {
                week: i64::from(week),
                total_weeks: self.weeks,
            });
        }
        Ok(())
    }

    fn match_index(&self, id: usize) -> Result<usize> {
        self.matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(LeagueError::UnknownMatch { id })
    }
}

/// Validate a pair of goal counts against `0..=MAX_GOALS`.
fn check_goals(home_goals: i64, away_goals: i64) -> Result<(u32, u32)> {
    let range = 0..=i64::from(MAX_GOALS);
    if !range.contains(&home_goals) || !range.contains(&away_goals) {
        return Err(LeagueError::GoalsOutOfRange {
            home_goals,
            away_goals,
            max: MAX_GOALS,
        });
    }
    Ok((home_goals as u32, away_goals as u32))
}
