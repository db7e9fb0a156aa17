use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TierError {
    #[error("Tier table is empty")]
    Empty,

    #[error("Tier at position {0} has a zero or invalid percentage")]
    ZeroPercentage(u32),

    #[error("Tier position {0} is out of range")]
    InvalidPosition(u32),

    #[error("Tier position {0} is defined more than once")]
    DuplicatePosition(u32),

    #[error("Tier percentages add up to {0}, maximum is 100")]
    TotalExceeds(f64),

    #[error("Malformed tier '{0}', expected <position>:<percentage>")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Empty amount")]
    Empty,

    #[error("Invalid digit in amount")]
    InvalidDigit,

    #[error("Too many decimals, maximum is {0}")]
    TooManyDecimals(u8),

    #[error("Amount overflow")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unexpected response shape, expected a tuple or an object")]
    UnexpectedShape,

    #[error("Missing field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid value for field '{0}'")]
    InvalidField(&'static str),

    #[error("Unknown draw type {0}")]
    UnknownDrawType(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address must start with 0x")]
    MissingPrefix,

    #[error("Address must be {expected} hex characters, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("Address contains invalid hex")]
    InvalidHex,
}
