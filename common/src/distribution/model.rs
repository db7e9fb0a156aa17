use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

/// How a prize pool is split among ranked winners.
///
/// The numeric ids match the ones used by the Gridotto contracts and UI.
/// Any id outside of `0..=3` resolves to [`PrizeModel::WinnerTakesAll`],
/// see [`PrizeModel::from_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PrizeModel {
    /// A single winner receives 100%
    #[default]
    WinnerTakesAll = 0,
    /// 50% / 30% / 20%
    Split3Tier = 1,
    /// 40% / 30% / 20% / 10%
    Split4Tier = 2,
    /// Every winner receives 100 / N percent
    EqualSplit = 3,
}

const WINNER_TAKES_ALL_BUCKETS: [f64; 1] = [100.0];
const SPLIT_3_TIER_BUCKETS: [f64; 3] = [50.0, 30.0, 20.0];
const SPLIT_4_TIER_BUCKETS: [f64; 4] = [40.0, 30.0, 20.0, 10.0];

impl PrizeModel {
    /// All prize models in id order
    pub const ALL: [PrizeModel; 4] = [
        PrizeModel::WinnerTakesAll,
        PrizeModel::Split3Tier,
        PrizeModel::Split4Tier,
        PrizeModel::EqualSplit,
    ];

    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Resolve a raw prize model id.
    ///
    /// Unrecognized ids fall back to `WinnerTakesAll` with a warning.
    pub fn from_id(id: u64) -> Self {
        match id {
            0 => PrizeModel::WinnerTakesAll,
            1 => PrizeModel::Split3Tier,
            2 => PrizeModel::Split4Tier,
            3 => PrizeModel::EqualSplit,
            unknown => {
                warn!(
                    "Unknown prize model id {}, falling back to {}",
                    unknown,
                    PrizeModel::WinnerTakesAll
                );
                PrizeModel::WinnerTakesAll
            }
        }
    }

    /// Fixed percentage buckets, `None` for `EqualSplit` whose buckets
    /// depend on the winner count.
    pub fn fixed_buckets(&self) -> Option<&'static [f64]> {
        match self {
            PrizeModel::WinnerTakesAll => Some(&WINNER_TAKES_ALL_BUCKETS),
            PrizeModel::Split3Tier => Some(&SPLIT_3_TIER_BUCKETS),
            PrizeModel::Split4Tier => Some(&SPLIT_4_TIER_BUCKETS),
            PrizeModel::EqualSplit => None,
        }
    }

    /// Number of percentage buckets the model defines for `total_winners`
    pub fn bucket_count(&self, total_winners: u32) -> u32 {
        match self.fixed_buckets() {
            Some(buckets) => buckets.len() as u32,
            None => total_winners,
        }
    }

    /// Percentage of the bucket at `index` (0 = first place).
    ///
    /// Returns `None` past the last bucket, and always for `EqualSplit`
    /// with zero winners.
    pub fn bucket(&self, index: u32, total_winners: u32) -> Option<f64> {
        match self.fixed_buckets() {
            Some(buckets) => buckets.get(index as usize).copied(),
            None if index < total_winners => Some(100.0 / total_winners as f64),
            None => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrizeModel::WinnerTakesAll => "Winner Takes All",
            PrizeModel::Split3Tier => "3-Tier Split",
            PrizeModel::Split4Tier => "4-Tier Split",
            PrizeModel::EqualSplit => "Equal Split",
        }
    }
}

impl From<u64> for PrizeModel {
    fn from(id: u64) -> Self {
        PrizeModel::from_id(id)
    }
}

impl fmt::Display for PrizeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for model in PrizeModel::ALL {
            assert_eq!(PrizeModel::from_id(model.id() as u64), model);
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(PrizeModel::from_id(4), PrizeModel::WinnerTakesAll);
        assert_eq!(PrizeModel::from_id(99), PrizeModel::WinnerTakesAll);
        assert_eq!(PrizeModel::from(u64::MAX), PrizeModel::WinnerTakesAll);
    }

    #[test]
    fn test_fixed_buckets_sum_to_100() {
        for model in [
            PrizeModel::WinnerTakesAll,
            PrizeModel::Split3Tier,
            PrizeModel::Split4Tier,
        ] {
            let sum: f64 = model.fixed_buckets().unwrap().iter().sum();
            assert_eq!(sum, 100.0, "{model}");
        }
        assert!(PrizeModel::EqualSplit.fixed_buckets().is_none());
    }

    #[test]
    fn test_equal_split_buckets() {
        let model = PrizeModel::EqualSplit;
        assert_eq!(model.bucket_count(5), 5);
        assert_eq!(model.bucket(0, 5), Some(20.0));
        assert_eq!(model.bucket(4, 5), Some(20.0));
        assert_eq!(model.bucket(5, 5), None);
        assert_eq!(model.bucket(0, 0), None);
    }
}
