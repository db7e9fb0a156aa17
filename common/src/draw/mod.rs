mod decode;

pub use decode::parse_u256;

use std::{cmp::Ordering, fmt};

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    address::Address,
    config::TICKET_COST_DECIMALS,
    distribution::{self, DistributionEntry, PrizeModel},
    error::{DecodeError, DistributionError, UnitError},
    time::{get_current_time_in_seconds, TimestampSeconds},
    units,
};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Kind of draw, as stored by the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DrawType {
    /// User created draw with a LYX prize
    UserLyx = 0,
    /// User created draw with an LSP7 token prize, tickets paid in that token
    UserLsp7 = 1,
    /// User created draw with LSP8 NFT prizes
    UserLsp8 = 2,
    PlatformWeekly = 3,
    PlatformMonthly = 4,
}

impl DrawType {
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn is_platform(&self) -> bool {
        matches!(self, DrawType::PlatformWeekly | DrawType::PlatformMonthly)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrawType::UserLyx => "LYX Prize",
            DrawType::UserLsp7 => "Token Prize",
            DrawType::UserLsp8 => "NFT Prize",
            DrawType::PlatformWeekly => "Weekly Draw",
            DrawType::PlatformMonthly => "Monthly Draw",
        }
    }
}

impl TryFrom<u64> for DrawType {
    type Error = DecodeError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => DrawType::UserLyx,
            1 => DrawType::UserLsp7,
            2 => DrawType::UserLsp8,
            3 => DrawType::PlatformWeekly,
            4 => DrawType::PlatformMonthly,
            unknown => return Err(DecodeError::UnknownDrawType(unknown)),
        })
    }
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Asset used to pay for tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentAsset {
    /// Native LYX sent as call value
    Native,
    /// LSP7 token, requires an authorization before buying
    Token(Address),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStatus {
    Active,
    /// End time reached, waiting for execution
    Ended,
    Completed,
    Cancelled,
}

/// Decoded `getDrawDetails` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawDetails {
    pub creator: Address,
    pub draw_type: DrawType,
    pub token_address: Address,
    /// In wei (or token units for LSP7 draws)
    pub ticket_price: U256,
    pub max_tickets: u64,
    pub tickets_sold: u64,
    pub prize_pool: U256,
    pub start_time: TimestampSeconds,
    pub end_time: TimestampSeconds,
    pub min_participants: u64,
    pub platform_fee_percent: u64,
    pub is_completed: bool,
    pub is_cancelled: bool,
    pub participant_count: u64,
    pub monthly_pool_contribution: U256,
}

impl DrawDetails {
    /// Decode a contract response given either as a tuple or as an object
    pub fn decode(value: &Value) -> Result<Self, DecodeError> {
        decode::decode_draw_details(value)
    }

    pub fn status(&self, now: TimestampSeconds) -> DrawStatus {
        if self.is_cancelled {
            DrawStatus::Cancelled
        } else if self.is_completed {
            DrawStatus::Completed
        } else if self.end_time <= now {
            DrawStatus::Ended
        } else {
            DrawStatus::Active
        }
    }

    pub fn is_active(&self, now: TimestampSeconds) -> bool {
        self.status(now) == DrawStatus::Active
    }

    /// Tickets sold relative to the ticket cap, from 0 to 100
    pub fn progress_percent(&self) -> f64 {
        if self.max_tickets == 0 {
            return 0.0;
        }

        (self.tickets_sold as f64 / self.max_tickets as f64 * 100.0).min(100.0)
    }

    pub fn payment_asset(&self) -> PaymentAsset {
        match self.draw_type {
            DrawType::UserLsp7 => PaymentAsset::Token(self.token_address),
            _ => PaymentAsset::Native,
        }
    }

    /// Value to pay for `count` tickets
    pub fn ticket_cost(&self, count: u64) -> Result<U256, UnitError> {
        units::ticket_cost(self.ticket_price, count)
    }

    /// Ticket cost as shown on the buy button
    pub fn format_ticket_cost(&self, count: u64) -> Result<String, UnitError> {
        let cost = self.ticket_cost(count)?;
        Ok(units::format_wei_fixed(cost, TICKET_COST_DECIMALS))
    }

    pub fn time_left(&self, now: TimestampSeconds) -> String {
        format_time_left(self.end_time, now)
    }

    /// Countdown against the local clock
    pub fn time_left_now(&self) -> String {
        self.time_left(get_current_time_in_seconds())
    }

    /// Prize preview of the current pool
    pub fn prize_preview(
        &self,
        prize_model: PrizeModel,
        total_winners: u32,
    ) -> Result<Vec<DistributionEntry>, DistributionError> {
        distribution::preview_pool_wei(self.prize_pool, prize_model, total_winners)
    }
}

/// Countdown text until `end_time`
pub fn format_time_left(end_time: TimestampSeconds, now: TimestampSeconds) -> String {
    if end_time <= now {
        return "Ended".to_string();
    }

    let diff = end_time - now;
    let days = diff / SECONDS_PER_DAY;
    let hours = (diff % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (diff % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = diff % SECONDS_PER_MINUTE;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Keep the draws that are neither completed nor cancelled, in order
pub fn filter_active(draws: Vec<(u64, DrawDetails)>) -> Vec<(u64, DrawDetails)> {
    draws
        .into_iter()
        .filter(|(_, draw)| !draw.is_completed && !draw.is_cancelled)
        .collect()
}

/// Draw kinds selectable in the draw browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawTypeFilter {
    #[default]
    All,
    /// Weekly and monthly platform draws
    Platform,
    Lyx,
    Token,
    Nft,
}

impl DrawTypeFilter {
    pub fn matches(&self, draw_type: DrawType) -> bool {
        match self {
            DrawTypeFilter::All => true,
            DrawTypeFilter::Platform => draw_type.is_platform(),
            DrawTypeFilter::Lyx => draw_type == DrawType::UserLyx,
            DrawTypeFilter::Token => draw_type == DrawType::UserLsp7,
            DrawTypeFilter::Nft => draw_type == DrawType::UserLsp8,
        }
    }
}

/// Field the draw browser sorts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawSortKey {
    #[default]
    EndTime,
    PrizePool,
    TicketPrice,
    /// Tickets sold
    Popularity,
}

impl DrawSortKey {
    fn compare(&self, a: &DrawDetails, b: &DrawDetails) -> Ordering {
        match self {
            DrawSortKey::EndTime => a.end_time.cmp(&b.end_time),
            DrawSortKey::PrizePool => a.prize_pool.cmp(&b.prize_pool),
            DrawSortKey::TicketPrice => a.ticket_price.cmp(&b.ticket_price),
            DrawSortKey::Popularity => a.tickets_sold.cmp(&b.tickets_sold),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Keep the draws of the selected kind, in order
pub fn filter_by_type(
    draws: Vec<(u64, DrawDetails)>,
    filter: DrawTypeFilter,
) -> Vec<(u64, DrawDetails)> {
    draws
        .into_iter()
        .filter(|(_, draw)| filter.matches(draw.draw_type))
        .collect()
}

/// Sort draws in place. Draws with equal keys keep their relative order in
/// both directions.
pub fn sort_draws(draws: &mut [(u64, DrawDetails)], key: DrawSortKey, order: SortOrder) {
    draws.sort_by(|(_, a), (_, b)| {
        let ordering = key.compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
