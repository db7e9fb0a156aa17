// Leaderboard
// Ranks accounts by the total they won across the recent winners list.
// Amounts stay in wei (U256) so large pools never lose precision.

use std::collections::HashMap;

use log::{debug, log_enabled, Level};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::{address::Address, config::LEADERBOARD_SIZE};

/// Aggregated wins of a single account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub address: Address,
    /// Sum of every prize won, in wei
    pub total_won: U256,
    pub draws_won: u32,
}

/// Build the leaderboard from `(winner, prize)` records, keeping the
/// default number of accounts
pub fn build_leaderboard<I>(wins: I) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = (Address, U256)>,
{
    build_leaderboard_with_limit(wins, LEADERBOARD_SIZE)
}

/// Build the leaderboard from `(winner, prize)` records.
///
/// Accounts are sorted by total won, highest first. Accounts with the same
/// total keep the order in which they first appear in `wins`. Only the
/// first `limit` accounts are returned.
pub fn build_leaderboard_with_limit<I>(wins: I, limit: usize) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = (Address, U256)>,
{
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    // Position of each account in entries
    let mut positions: HashMap<Address, usize> = HashMap::new();

    for (address, prize) in wins {
        match positions.get(&address) {
            Some(&index) => {
                let entry = &mut entries[index];
                entry.total_won = entry.total_won.saturating_add(prize);
                entry.draws_won = entry.draws_won.saturating_add(1);
            }
            None => {
                positions.insert(address, entries.len());
                entries.push(LeaderboardEntry {
                    address,
                    total_won: prize,
                    draws_won: 1,
                });
            }
        }
    }

    // sort_by is stable, ties keep their first appearance order
    entries.sort_by(|a, b| b.total_won.cmp(&a.total_won));

    if log_enabled!(Level::Debug) {
        debug!(
            "Leaderboard built from {} accounts, keeping {}",
            entries.len(),
            limit.min(entries.len())
        );
    }

    entries.truncate(limit);
    entries
}

/// Rank label shown next to an account, ranks start at 1
pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        rank => format!("#{}", rank),
    }
}
