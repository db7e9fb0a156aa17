use primitive_types::U256;
use serde::Serialize;

use gridotto_common::{
    address::Address,
    config::{CHAIN_ID, COIN_SYMBOL, NETWORK_NAME},
    distribution::DistributionEntry,
    units::format_wei,
};

/// Full preview as printed with `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewReport<'a> {
    pub network: &'static str,
    pub chain_id: u64,
    /// Gridotto diamond contract
    pub contract: Address,
    /// Pool in LYX, full precision
    pub pool: String,
    pub pool_wei: String,
    /// Prize model name, or "Custom Tiers"
    pub model: &'a str,
    pub total_winners: u32,
    pub entries: &'a [DistributionEntry],
}

impl<'a> PreviewReport<'a> {
    pub fn new(
        contract: Address,
        pool_wei: U256,
        model: &'a str,
        total_winners: u32,
        entries: &'a [DistributionEntry],
    ) -> Self {
        Self {
            network: NETWORK_NAME,
            chain_id: CHAIN_ID,
            contract,
            pool: format_wei(pool_wei),
            pool_wei: pool_wei.to_string(),
            model,
            total_winners,
            entries,
        }
    }

    pub fn to_table(&self) -> String {
        let mut lines = vec![
            format!(
                "{} (chain {}) | Gridotto {}",
                self.network,
                self.chain_id,
                self.contract.short()
            ),
            format!("Explorer: {}", self.contract.explorer_url()),
            format!(
                "Pool: {} {} | {} | {} winner(s)",
                self.pool, COIN_SYMBOL, self.model, self.total_winners
            ),
            format!("{:<6}{:>10}{:>20}", "Tier", "Share", "Amount"),
        ];

        if self.entries.is_empty() {
            lines.push("No prize tiers awarded".to_string());
        }

        for entry in self.entries {
            lines.push(format!(
                "{:<6}{:>9.2}%{:>16} {}",
                format!("#{}", entry.tier),
                entry.percentage,
                entry.amount,
                COIN_SYMBOL
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridotto_common::{
        config::DIAMOND_ADDRESS,
        distribution::{compute_distribution, PrizeModel},
        units::parse_lyx,
    };

    fn contract() -> Address {
        DIAMOND_ADDRESS.parse().unwrap()
    }

    #[test]
    fn test_table() {
        let pool = parse_lyx("100").unwrap();
        let entries = compute_distribution(100.0, PrizeModel::Split3Tier, 2).unwrap();
        let report = PreviewReport::new(contract(), pool, "3-Tier Split", 2, &entries);

        let table = report.to_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "LUKSO Testnet (chain 4201) | Gridotto 0x5ad8...f276");
        assert!(lines[1].ends_with("/address/0x5ad808fae645ba3682170467114e5b80a70bf276"));
        assert_eq!(lines[2], "Pool: 100 LYX | 3-Tier Split | 2 winner(s)");
        assert!(lines[4].starts_with("#1"));
        assert!(lines[4].contains("50.00%"));
        assert!(lines[4].ends_with("50.00 LYX"));
        assert!(lines[5].ends_with("30.00 LYX"));
    }

    #[test]
    fn test_empty_table() {
        let report = PreviewReport::new(contract(), U256::zero(), "Winner Takes All", 0, &[]);
        assert!(report.to_table().ends_with("No prize tiers awarded"));
    }

    #[test]
    fn test_json() {
        let pool = parse_lyx("1.5").unwrap();
        let entries = compute_distribution(1.5, PrizeModel::WinnerTakesAll, 1).unwrap();
        let report = PreviewReport::new(contract(), pool, "Winner Takes All", 1, &entries);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["chainId"], 4201);
        assert_eq!(json["contract"], "0x5ad808fae645ba3682170467114e5b80a70bf276");
        assert_eq!(json["pool"], "1.5");
        assert_eq!(json["poolWei"], "1500000000000000000");
        assert_eq!(json["totalWinners"], 1);
        assert_eq!(json["entries"][0]["amount"], "1.50");
        assert_eq!(json["entries"][0]["winnerCount"], 1);
    }
}
