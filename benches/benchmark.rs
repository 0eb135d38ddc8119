use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use league_core::fixture::generate_fixtures;
use league_core::projection::{project_standings, summarize_projections};
use league_core::simulate::{simulate_pending, simulate_score};
use league_core::standings::calculate_standings;
use league_core::team::{Roster, Team};

fn create_roster(n: usize) -> Roster {
    let teams = (0..n)
        .map(|i| Team::new(format!("Team{}", i), 30 + (i as u32 * 7) % 70))
        .collect();
    Roster::new(teams).unwrap()
}

fn bench_simulate_score(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("simulate_score", |b| {
        b.iter(|| simulate_score(black_box(85), black_box(70), &mut rng))
    });
}

fn bench_generate_fixtures(c: &mut Criterion) {
    let roster = create_roster(20);

    c.bench_function("generate_fixtures_20_teams", |b| {
        b.iter(|| generate_fixtures(black_box(roster.teams()), 38))
    });
}

fn bench_standings(c: &mut Criterion) {
    let roster = create_roster(20);
    let mut matches = generate_fixtures(roster.teams(), 38).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    simulate_pending(&roster, &mut matches, None, &mut rng).unwrap();

    c.bench_function("standings_20_teams_full_season", |b| {
        b.iter(|| calculate_standings(black_box(&roster), black_box(&matches)))
    });
}

fn bench_projection(c: &mut Criterion) {
    let roster = create_roster(20);
    let matches = generate_fixtures(roster.teams(), 38).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("project_standings_20_teams", |b| {
        b.iter(|| project_standings(black_box(&roster), black_box(&matches), &mut rng))
    });

    c.bench_function("projection_summary_1000_runs", |b| {
        b.iter(|| summarize_projections(black_box(&roster), black_box(&matches), 1000, Some(42)))
    });
}

criterion_group!(
    benches,
    bench_simulate_score,
    bench_generate_fixtures,
    bench_standings,
    bench_projection,
);
criterion_main!(benches);
