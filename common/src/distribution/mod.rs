// Prize distribution preview.
//
// Splits a prize pool among ranked winners according to a `PrizeModel`
// or a creator-defined `TierTable`. The actual payout happens on chain;
// this module only renders what each tier is expected to receive.
//
// The calculation is pure: no state, no I/O, the same inputs always give
// the same entries.
//
// # Algorithm
//
// 1. Resolve the percentage buckets of the model
// 2. Walk the buckets from first place, stopping at `total_winners`
// 3. Each emitted tier gets `pool * percentage / 100`, formatted with 2 decimals
//
// Buckets past `total_winners` are dropped, never redistributed, so the
// percentages of a preview may add up to less than 100. Amounts are rounded
// per tier and are not reconciled against the pool total.

mod model;
mod tiers;

pub use model::PrizeModel;
pub use tiers::{TierShare, TierTable};

use log::{debug, log_enabled, Level};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::{config::PREVIEW_AMOUNT_DECIMALS, error::DistributionError, units};

/// One awarded tier of a distribution preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    /// 1-based rank, 1 is first place
    pub tier: u32,
    /// Share of the pool, between 0 and 100
    pub percentage: f64,
    /// Pool share formatted with 2 decimals
    pub amount: String,
    /// Winners sharing this tier, always 1
    pub winner_count: u32,
}

/// Compute the prize distribution preview of a pool.
///
/// `pool_amount` is in display units (LYX, not wei). Zero winners yields an
/// empty preview for every model.
pub fn compute_distribution(
    pool_amount: f64,
    prize_model: PrizeModel,
    total_winners: u32,
) -> Result<Vec<DistributionEntry>, DistributionError> {
    validate_pool(pool_amount)?;

    let buckets = (0..prize_model.bucket_count(total_winners))
        .map_while(|index| prize_model.bucket(index, total_winners));
    let entries = emit_entries(pool_amount, buckets, total_winners);

    if log_enabled!(Level::Debug) {
        debug!(
            "Distribution preview of {} with {} for {} winners: {} tiers",
            pool_amount,
            prize_model,
            total_winners,
            entries.len()
        );
    }

    Ok(entries)
}

/// Same as [`compute_distribution`] for a raw prize model id.
///
/// Unknown ids are previewed as `WinnerTakesAll`.
pub fn compute_distribution_for_id(
    pool_amount: f64,
    prize_model_id: u64,
    total_winners: u32,
) -> Result<Vec<DistributionEntry>, DistributionError> {
    compute_distribution(pool_amount, PrizeModel::from_id(prize_model_id), total_winners)
}

/// Compute the preview of a draw using creator-defined tiers
pub fn compute_tier_distribution(
    pool_amount: f64,
    tiers: &TierTable,
    total_winners: u32,
) -> Result<Vec<DistributionEntry>, DistributionError> {
    validate_pool(pool_amount)?;
    Ok(emit_entries(pool_amount, tiers.percentages(), total_winners))
}

/// Compute the preview of an on-chain pool expressed in wei
pub fn preview_pool_wei(
    pool_wei: U256,
    prize_model: PrizeModel,
    total_winners: u32,
) -> Result<Vec<DistributionEntry>, DistributionError> {
    compute_distribution(units::wei_to_lyx_f64(pool_wei), prize_model, total_winners)
}

fn validate_pool(pool_amount: f64) -> Result<(), DistributionError> {
    if !pool_amount.is_finite() {
        return Err(DistributionError::InvalidArgument(format!(
            "pool amount must be finite, got {}",
            pool_amount
        )));
    }

    if pool_amount < 0.0 {
        return Err(DistributionError::InvalidArgument(format!(
            "pool amount must not be negative, got {}",
            pool_amount
        )));
    }

    Ok(())
}

fn emit_entries(
    pool_amount: f64,
    percentages: impl Iterator<Item = f64>,
    total_winners: u32,
) -> Vec<DistributionEntry> {
    percentages
        .take(total_winners as usize)
        .zip(1u32..)
        .map(|(percentage, tier)| DistributionEntry {
            tier,
            percentage,
            amount: format!(
                "{:.*}",
                PREVIEW_AMOUNT_DECIMALS,
                pool_amount * percentage / 100.0
            ),
            winner_count: 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percentages(entries: &[DistributionEntry]) -> Vec<f64> {
        entries.iter().map(|e| e.percentage).collect()
    }

    fn amounts(entries: &[DistributionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.amount.as_str()).collect()
    }

    #[test]
    fn test_fixed_models_sum_to_100() {
        for model in [
            PrizeModel::WinnerTakesAll,
            PrizeModel::Split3Tier,
            PrizeModel::Split4Tier,
        ] {
            for winners in [4, 5, 100] {
                let entries = compute_distribution(1000.0, model, winners).unwrap();
                let sum: f64 = entries.iter().map(|e| e.percentage).sum();
                assert_eq!(sum, 100.0, "{model} with {winners} winners");
            }
        }
    }

    #[test]
    fn test_split_3_tier_truncated() {
        let entries = compute_distribution(100.0, PrizeModel::Split3Tier, 2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tier, 1);
        assert_eq!(entries[0].percentage, 50.0);
        assert_eq!(entries[1].tier, 2);
        assert_eq!(entries[1].percentage, 30.0);
    }

    #[test]
    fn test_equal_split() {
        let entries = compute_distribution(200.0, PrizeModel::EqualSplit, 4).unwrap();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.percentage == 25.0));
        assert_eq!(amounts(&entries), vec!["50.00"; 4]);
        assert_eq!(
            entries.iter().map(|e| e.tier).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_winner_takes_all_amount() {
        let entries = compute_distribution(100.0, PrizeModel::WinnerTakesAll, 1).unwrap();
        assert_eq!(
            entries,
            vec![DistributionEntry {
                tier: 1,
                percentage: 100.0,
                amount: "100.00".to_string(),
                winner_count: 1,
            }]
        );
    }

    #[test]
    fn test_zero_winners_is_empty() {
        for model in PrizeModel::ALL {
            assert!(compute_distribution(100.0, model, 0).unwrap().is_empty());
        }
    }

    #[test]
    fn test_unknown_model_falls_back() {
        let entries = compute_distribution_for_id(42.0, 99, 1).unwrap();
        assert_eq!(
            entries,
            compute_distribution(42.0, PrizeModel::WinnerTakesAll, 1).unwrap()
        );
        assert_eq!(entries[0].amount, "42.00");
        assert_eq!(entries[0].percentage, 100.0);
    }

    #[test]
    fn test_idempotent() {
        let first = compute_distribution(1234.5678, PrizeModel::Split4Tier, 3).unwrap();
        let second = compute_distribution(1234.5678, PrizeModel::Split4Tier, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rounding_per_tier() {
        let entries = compute_distribution(33.333, PrizeModel::Split3Tier, 3).unwrap();
        assert_eq!(amounts(&entries), vec!["16.67", "10.00", "6.67"]);
    }

    #[test]
    fn test_equal_split_fractional_percentage() {
        let entries = compute_distribution(10.0, PrizeModel::EqualSplit, 3).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| (e.percentage - 100.0 / 3.0).abs() < 1e-12));
        assert_eq!(amounts(&entries), vec!["3.33"; 3]);
    }

    #[test]
    fn test_invalid_pool() {
        for pool in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                compute_distribution(pool, PrizeModel::WinnerTakesAll, 1),
                Err(DistributionError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_zero_pool() {
        let entries = compute_distribution(0.0, PrizeModel::Split3Tier, 3).unwrap();
        assert_eq!(amounts(&entries), vec!["0.00", "0.00", "0.00"]);
    }

    #[test]
    fn test_tier_table_distribution() {
        let table: TierTable = "1:60,2:25,3:15".parse().unwrap();
        let entries = compute_tier_distribution(200.0, &table, 2).unwrap();
        assert_eq!(percentages(&entries), vec![60.0, 25.0]);
        assert_eq!(amounts(&entries), vec!["120.00", "50.00"]);

        let entries = compute_tier_distribution(200.0, &table, 10).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].tier, 3);
    }

    #[test]
    fn test_preview_from_wei() {
        // 12.5 LYX
        let pool = U256::from(12_500_000_000_000_000_000u128);
        let entries = preview_pool_wei(pool, PrizeModel::Split4Tier, 4).unwrap();
        assert_eq!(amounts(&entries), vec!["5.00", "3.75", "2.50", "1.25"]);
    }

    #[test]
    fn test_entry_serialization() {
        let entries = compute_distribution(100.0, PrizeModel::WinnerTakesAll, 1).unwrap();
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tier": 1,
                "percentage": 100.0,
                "amount": "100.00",
                "winnerCount": 1
            })
        );
    }
}
