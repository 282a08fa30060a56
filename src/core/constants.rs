// Cost curve: cost = floor(base[rarity] * level * 1.5)
pub const COMMON_RARITY: &str = "common";
pub const DEFAULT_COMMON_BASE_COST: u64 = 10;
pub const DEFAULT_RARE_BASE_COST: u64 = 20;
pub const DEFAULT_EPIC_BASE_COST: u64 = 40;
pub const DEFAULT_LEGENDARY_BASE_COST: u64 = 80;
// Applied as (base * level * NUM) / DEN to keep the floor exact
pub const COST_CURVE_MULTIPLIER_NUM: u64 = 3;
pub const COST_CURVE_MULTIPLIER_DEN: u64 = 2;

// Time units
pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;
pub const READY_TEXT: &str = "Ready!";

// Daily rewards
pub const DAILY_CLAIM_COOLDOWN_MS: u64 = MS_PER_DAY;
// Missing a whole day after the cooldown ends the streak
pub const DAILY_STREAK_GRACE_MS: u64 = 2 * MS_PER_DAY;
