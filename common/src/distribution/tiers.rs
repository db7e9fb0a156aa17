use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TierError;

// Tolerance used when adding fractional percentages together
const PERCENTAGE_EPSILON: f64 = 1e-9;

/// A single creator-defined tier: the winner at `position` receives `percentage`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierShare {
    pub position: u32,
    pub percentage: f64,
}

impl TierShare {
    pub fn new(position: u32, percentage: f64) -> Self {
        Self {
            position,
            percentage,
        }
    }
}

/// Creator-defined prize tiers of a multi-winner draw.
///
/// Positions are always `1..=n` with no gap once constructed, and the
/// percentages never add up to more than 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTable {
    tiers: Vec<TierShare>,
}

impl TierTable {
    pub fn new(mut tiers: Vec<TierShare>) -> Result<Self, TierError> {
        if tiers.is_empty() {
            return Err(TierError::Empty);
        }

        tiers.sort_by_key(|tier| tier.position);

        let mut total = 0.0;
        for (index, tier) in tiers.iter().enumerate() {
            if index > 0 && tiers[index - 1].position == tier.position {
                return Err(TierError::DuplicatePosition(tier.position));
            }

            if tier.position as usize != index + 1 {
                return Err(TierError::InvalidPosition(tier.position));
            }

            if !tier.percentage.is_finite() || tier.percentage <= 0.0 {
                return Err(TierError::ZeroPercentage(tier.position));
            }

            total += tier.percentage;
        }

        if total > 100.0 + PERCENTAGE_EPSILON {
            return Err(TierError::TotalExceeds(total));
        }

        Ok(Self { tiers })
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn tiers(&self) -> &[TierShare] {
        &self.tiers
    }

    pub fn total_percentage(&self) -> f64 {
        self.tiers.iter().map(|tier| tier.percentage).sum()
    }

    /// Percentages in position order
    pub fn percentages(&self) -> impl Iterator<Item = f64> + '_ {
        self.tiers.iter().map(|tier| tier.percentage)
    }
}

impl<'de> Deserialize<'de> for TierTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tiers = Vec::<TierShare>::deserialize(deserializer)?;
        TierTable::new(tiers).map_err(serde::de::Error::custom)
    }
}

impl FromStr for TierTable {
    type Err = TierError;

    // Format: "1:50,2:30,3:20"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiers = Vec::new();
        for pair in s.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (position, percentage) = pair
                .split_once(':')
                .ok_or_else(|| TierError::Malformed(pair.to_string()))?;

            let position = position
                .trim()
                .parse()
                .map_err(|_| TierError::Malformed(pair.to_string()))?;
            let percentage = percentage
                .trim()
                .parse()
                .map_err(|_| TierError::Malformed(pair.to_string()))?;

            tiers.push(TierShare::new(position, percentage));
        }

        TierTable::new(tiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsorted_tiers_are_sorted() {
        let table = TierTable::new(vec![
            TierShare::new(3, 10.0),
            TierShare::new(1, 60.0),
            TierShare::new(2, 30.0),
        ])
        .unwrap();

        let positions: Vec<u32> = table.tiers().iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(table.percentages().collect::<Vec<_>>(), vec![60.0, 30.0, 10.0]);
        assert_eq!(table.total_percentage(), 100.0);
    }

    #[test]
    fn test_invalid_tables() {
        assert_eq!(TierTable::new(vec![]), Err(TierError::Empty));
        assert_eq!(
            TierTable::new(vec![TierShare::new(1, 50.0), TierShare::new(1, 20.0)]),
            Err(TierError::DuplicatePosition(1))
        );
        assert_eq!(
            TierTable::new(vec![TierShare::new(1, 50.0), TierShare::new(3, 20.0)]),
            Err(TierError::InvalidPosition(3))
        );
        assert_eq!(
            TierTable::new(vec![TierShare::new(0, 50.0)]),
            Err(TierError::InvalidPosition(0))
        );
        assert_eq!(
            TierTable::new(vec![TierShare::new(1, 0.0)]),
            Err(TierError::ZeroPercentage(1))
        );
        assert_eq!(
            TierTable::new(vec![TierShare::new(1, f64::NAN)]),
            Err(TierError::ZeroPercentage(1))
        );
        assert_eq!(
            TierTable::new(vec![TierShare::new(1, 70.0), TierShare::new(2, 40.0)]),
            Err(TierError::TotalExceeds(110.0))
        );
    }

    #[test]
    fn test_partial_total_is_allowed() {
        let table = TierTable::new(vec![TierShare::new(1, 45.0), TierShare::new(2, 25.0)]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_percentage(), 70.0);
    }

    #[test]
    fn test_parse_from_str() {
        let table: TierTable = "1:50, 2:30,3:20".parse().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.tiers()[1], TierShare::new(2, 30.0));

        assert_eq!(
            "1=50".parse::<TierTable>(),
            Err(TierError::Malformed("1=50".to_string()))
        );
        assert_eq!(
            "1:abc".parse::<TierTable>(),
            Err(TierError::Malformed("1:abc".to_string()))
        );
        assert_eq!("".parse::<TierTable>(), Err(TierError::Empty));
    }

    #[test]
    fn test_deserialize_validates() {
        let table: TierTable =
            serde_json::from_str(r#"[{"position":2,"percentage":40},{"position":1,"percentage":60}]"#)
                .unwrap();
        assert_eq!(table.tiers()[0].position, 1);

        let invalid = serde_json::from_str::<TierTable>(r#"[{"position":2,"percentage":40}]"#);
        assert!(invalid.is_err());
    }
}
