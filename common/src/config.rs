use std::time::Duration;

pub const VERSION: &str = env!("BUILD_VERSION");

// Diamond proxy holding every Gridotto facet
pub const DIAMOND_ADDRESS: &str = "0x5Ad808FAE645BA3682170467114e5b80A70bF276";

// LUKSO testnet
pub const CHAIN_ID: u64 = 4201;
pub const NETWORK_NAME: &str = "LUKSO Testnet";
pub const EXPLORER_URL: &str = "https://explorer.execution.testnet.lukso.network";

// Native currency
pub const COIN_SYMBOL: &str = "LYX";
// 18 decimals numbers
pub const COIN_DECIMALS: u8 = 18;

// Prize preview amounts are shown with 2 decimals
pub const PREVIEW_AMOUNT_DECIMALS: usize = 2;
// Ticket totals are shown with 4 decimals
pub const TICKET_COST_DECIMALS: usize = 4;

// Draw detail lookups are reused for 30 seconds
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);
// Maximum entries kept by a cache before LRU eviction
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

// Accounts shown on the leaderboard
pub const LEADERBOARD_SIZE: usize = 20;

// Shortened addresses keep "0x" + 4 hex chars at the front and 4 at the end
pub const SHORT_ADDRESS_PREFIX_LEN: usize = 6;
pub const SHORT_ADDRESS_SUFFIX_LEN: usize = 4;
