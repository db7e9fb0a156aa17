pub mod address;
pub mod cache;
pub mod config;
pub mod distribution;
pub mod draw;
pub mod error;
pub mod leaderboard;
pub mod time;
pub mod units;
