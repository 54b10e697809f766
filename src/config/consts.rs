// src/config/consts.rs

// Source-A (game forecasts)
pub const SLATE_URL: &str = "https://www.sportsline.com/nba/picks/";
pub const FORECAST_PREFIX: &str = "https://www.sportsline.com/nba/game-forecast/NBA_";
pub const FORECAST_SUFFIX: &str = "/daily-fantasy-projections/";
pub const USER_AGENT: &str = "propgap/0.2";

// Slate times are UTC; forecast URLs are keyed by the local (Central) game date.
// Fixed offset, no DST table.
pub const LOCAL_OFFSET_HOURS: i64 = -5;

// Record extraction
pub const STAT_WIDTH: usize = 6;
pub const STAT_HEADER_TOKENS: usize = 6;
pub const NAME_HEADER_LINES: usize = 1;
pub const SLATE_GROUP: usize = 3;

// Home-team labels on the slate that differ from the forecast page's toggle button.
pub const HOME_ALIASES: &[(&str, &str)] = &[
    ("Golden St.", "Golden State"),
    ("L.A. Clippers", "Los Angeles"),
    ("L.A. Lakers", "Los Angeles"),
];

// Retrieval
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const RETRY_ATTEMPTS: usize = 2; // first try + one retry
pub const RETRY_BACKOFF_MS: u64 = 750;

// Source-B credentials
pub const ENV_EMAIL: &str = "LINES_EMAIL";
pub const ENV_PASSWORD: &str = "LINES_PASSWORD";

// Report
pub const DEFAULT_TOP_N: usize = 5;

// Local files
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_PAGES_DIR: &str = ".store/pages";
