// Normalisation of `getDrawDetails` responses.
//
// Depending on the client library a contract call returns either a
// positional tuple or an object keyed by output name (web3 also adds
// positional "0", "1", ... keys). Both shapes are decoded here into a
// single DrawDetails so nothing past this point deals with the ambiguity.

use primitive_types::U256;
use serde_json::{Map, Value};

use super::{DrawDetails, DrawType};
use crate::{address::Address, error::DecodeError};

// ABI output order of getDrawDetails
const FIELDS: [&str; 15] = [
    "creator",
    "drawType",
    "tokenAddress",
    "ticketPrice",
    "maxTickets",
    "ticketsSold",
    "prizePool",
    "startTime",
    "endTime",
    "minParticipants",
    "platformFeePercent",
    "isCompleted",
    "isCancelled",
    "participantCount",
    "monthlyPoolContribution",
];

enum Fields<'a> {
    Tuple(&'a [Value]),
    Named(&'a Map<String, Value>),
}

impl<'a> Fields<'a> {
    fn from_value(value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Array(values) => Ok(Fields::Tuple(values)),
            Value::Object(map) => Ok(Fields::Named(map)),
            _ => Err(DecodeError::UnexpectedShape),
        }
    }

    fn get(&self, index: usize) -> Result<(&'static str, &'a Value), DecodeError> {
        let name = FIELDS[index];
        let value = match *self {
            Fields::Tuple(values) => values.get(index),
            Fields::Named(map) => map.get(name).or_else(|| map.get(&index.to_string())),
        };

        value
            .filter(|value| !value.is_null())
            .map(|value| (name, value))
            .ok_or(DecodeError::MissingField(name))
    }

    fn u256(&self, index: usize) -> Result<U256, DecodeError> {
        let (name, value) = self.get(index)?;
        parse_u256(value).ok_or(DecodeError::InvalidField(name))
    }

    fn u64(&self, index: usize) -> Result<u64, DecodeError> {
        let (name, value) = self.get(index)?;
        parse_u256(value)
            .filter(|value| *value <= U256::from(u64::MAX))
            .map(|value| value.as_u64())
            .ok_or(DecodeError::InvalidField(name))
    }

    fn bool(&self, index: usize) -> Result<bool, DecodeError> {
        let (name, value) = self.get(index)?;
        match value {
            Value::Bool(value) => Ok(*value),
            Value::String(value) if value == "true" => Ok(true),
            Value::String(value) if value == "false" => Ok(false),
            _ => Err(DecodeError::InvalidField(name)),
        }
    }

    fn address(&self, index: usize) -> Result<Address, DecodeError> {
        let (name, value) = self.get(index)?;
        value
            .as_str()
            .and_then(|value| value.parse().ok())
            .ok_or(DecodeError::InvalidField(name))
    }
}

/// Parse an unsigned integer given as a JSON number, a decimal string or
/// a `0x` prefixed hex string
pub fn parse_u256(value: &Value) -> Option<U256> {
    match value {
        Value::Number(number) => number.as_u64().map(U256::from),
        Value::String(text) => {
            let text = text.trim();
            match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
                Some(digits) if !digits.is_empty() => U256::from_str_radix(digits, 16).ok(),
                Some(_) => None,
                None if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                    U256::from_dec_str(text).ok()
                }
                None => None,
            }
        }
        _ => None,
    }
}

pub(super) fn decode_draw_details(value: &Value) -> Result<DrawDetails, DecodeError> {
    let fields = Fields::from_value(value)?;

    let draw_type = fields.u64(1)?;
    let draw_type = DrawType::try_from(draw_type)?;

    Ok(DrawDetails {
        creator: fields.address(0)?,
        draw_type,
        token_address: fields.address(2)?,
        ticket_price: fields.u256(3)?,
        max_tickets: fields.u64(4)?,
        tickets_sold: fields.u64(5)?,
        prize_pool: fields.u256(6)?,
        start_time: fields.u64(7)?,
        end_time: fields.u64(8)?,
        min_participants: fields.u64(9)?,
        platform_fee_percent: fields.u64(10)?,
        is_completed: fields.bool(11)?,
        is_cancelled: fields.bool(12)?,
        participant_count: fields.u64(13)?,
        monthly_pool_contribution: fields.u256(14)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_u256() {
        assert_eq!(parse_u256(&json!(42)), Some(U256::from(42u64)));
        assert_eq!(parse_u256(&json!("42")), Some(U256::from(42u64)));
        assert_eq!(parse_u256(&json!("0x2a")), Some(U256::from(42u64)));
        assert_eq!(
            parse_u256(&json!("1000000000000000000000")),
            Some(U256::from(1_000_000_000_000_000_000_000u128))
        );
        assert_eq!(parse_u256(&json!(-1)), None);
        assert_eq!(parse_u256(&json!(1.5)), None);
        assert_eq!(parse_u256(&json!("0x")), None);
        assert_eq!(parse_u256(&json!("-5")), None);
        assert_eq!(parse_u256(&json!("")), None);
        assert_eq!(parse_u256(&json!(true)), None);
    }
}
