/// Bonus added to the home side's strength before computing its goal ceiling
pub const HOME_ADVANTAGE: u32 = 10;

/// Strength points per possible goal (a strength of 85 can score up to 4)
pub const GOAL_STRENGTH_DIVISOR: u32 = 20;

/// Points awarded for a win
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded to each side for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// Highest goal count accepted for one side of a recorded result
pub const MAX_GOALS: u32 = u16::MAX as u32;

/// Lowest accepted team strength
pub const MIN_STRENGTH: u32 = 1;

/// Highest accepted team strength
pub const MAX_STRENGTH: u32 = 100;

/// Season length used when no configuration is supplied
pub const DEFAULT_WEEKS: u32 = 6;

/// Roster used when no configuration is supplied
pub const DEFAULT_ROSTER: [(&str, u32); 4] = [
    ("Alpha FC", 85),
    ("Bravo United", 70),
    ("Charlie Town", 60),
    ("Delta SC", 50),
];
