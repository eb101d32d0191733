// Run length
pub const MAX_DAYS: u32 = 30;

// Debt compounds daily while any balance is outstanding
pub const DAILY_INTEREST_RATE: f64 = 0.05;

// Price volatility, drawn fresh per commodity per recalculation
pub const VOLATILITY_MIN: f64 = 0.25;
pub const VOLATILITY_MAX: f64 = 2.25;

// Fixed house margin on sales
pub const SELL_MARGIN: f64 = 0.80;

// Inventory capacity before race bonuses and upgrades
pub const BASE_CAPACITY: u32 = 50;

// Odd-job wage when a day passes with no trades: floor(u * SPREAD) + BASE
pub const ODD_JOB_WAGE_SPREAD: i64 = 150;
pub const ODD_JOB_WAGE_BASE: i64 = 50;

// Health
pub const BASE_MAX_HEALTH: i32 = 100;
pub const BLEED_THRESHOLD: f64 = 0.25;
pub const BLEED_DAMAGE: i32 = 5;
pub const FLEE_DAMAGE: i32 = 10;
pub const FLAVOR_HEAL: i32 = 1;

// d20 checks
pub const D20_SIDES: u8 = 20;
pub const NATURAL_MAX: u8 = 20;
pub const NATURAL_MIN: u8 = 1;
pub const COUNTER_BONUS: i32 = 5;

// Event log ring buffer
pub const LOG_CAPACITY: usize = 50;
