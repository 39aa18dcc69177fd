//! Charge metadata tag linking a provider charge back to its raffle.
//!
//! The provider echoes caller-supplied metadata through the webhook, so the
//! tag `rifa_<raffleId>_<timestampMillis>` is the only link the asynchronous
//! notification has back to the raffle it belongs to.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;

use super::RaffleId;

/// The `externalId` metadata value attached to every charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeTag {
    raffle_id: RaffleId,
    issued_at_millis: i64,
}

/// Error returned when an incoming `externalId` cannot be interpreted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChargeTagError {
    /// The tag does not start with the `rifa_` prefix.
    #[error("external id missing 'rifa_' prefix: {0}")]
    MissingPrefix(String),
    /// The tag has no timestamp segment after the raffle id.
    #[error("external id missing timestamp segment: {0}")]
    MissingTimestamp(String),
    /// The raffle id segment is not a valid UUID.
    #[error("external id has invalid raffle id: {0}")]
    InvalidRaffleId(String),
    /// The timestamp segment is not a valid integer.
    #[error("external id has invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl ChargeTag {
    /// Creates a tag for the given raffle, stamped with the current time.
    #[must_use]
    pub fn new(raffle_id: RaffleId) -> Self {
        Self {
            raffle_id,
            issued_at_millis: Utc::now().timestamp_millis(),
        }
    }

    /// Creates a tag with an explicit timestamp (tests, replay).
    #[must_use]
    pub const fn with_timestamp(raffle_id: RaffleId, issued_at_millis: i64) -> Self {
        Self {
            raffle_id,
            issued_at_millis,
        }
    }

    /// Returns the raffle this tag points at.
    #[must_use]
    pub const fn raffle_id(&self) -> RaffleId {
        self.raffle_id
    }

    /// Returns the issuance timestamp in milliseconds since the epoch.
    #[must_use]
    pub const fn issued_at_millis(&self) -> i64 {
        self.issued_at_millis
    }
}

impl fmt::Display for ChargeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rifa_{}_{}", self.raffle_id, self.issued_at_millis)
    }
}

impl FromStr for ChargeTag {
    type Err = ChargeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("rifa_")
            .ok_or_else(|| ChargeTagError::MissingPrefix(s.to_string()))?;

        // The raffle id is a UUID (contains '-', never '_'), so the last '_'
        // separates it from the timestamp.
        let (raffle_part, ts_part) = rest
            .rsplit_once('_')
            .ok_or_else(|| ChargeTagError::MissingTimestamp(s.to_string()))?;

        let uuid: uuid::Uuid = raffle_part
            .parse()
            .map_err(|_| ChargeTagError::InvalidRaffleId(raffle_part.to_string()))?;

        let issued_at_millis: i64 = ts_part
            .parse()
            .map_err(|_| ChargeTagError::InvalidTimestamp(ts_part.to_string()))?;

        Ok(Self {
            raffle_id: RaffleId::from_uuid(uuid),
            issued_at_millis,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_round_trip() {
        let tag = ChargeTag::with_timestamp(RaffleId::new(), 1_722_000_000_000);
        let parsed: Result<ChargeTag, _> = tag.to_string().parse();
        let Ok(parsed) = parsed else {
            panic!("round trip failed");
        };
        assert_eq!(parsed, tag);
    }

    #[test]
    fn rejects_missing_prefix() {
        let result = "sorteio_abc_123".parse::<ChargeTag>();
        assert!(matches!(result, Err(ChargeTagError::MissingPrefix(_))));
    }

    #[test]
    fn rejects_missing_timestamp() {
        let id = RaffleId::new();
        let result = format!("rifa_{id}").parse::<ChargeTag>();
        assert!(matches!(result, Err(ChargeTagError::MissingTimestamp(_))));
    }

    #[test]
    fn rejects_non_uuid_raffle_id() {
        let result = "rifa_not-a-uuid_1722000000000".parse::<ChargeTag>();
        assert!(matches!(result, Err(ChargeTagError::InvalidRaffleId(_))));
    }

    #[test]
    fn rejects_non_numeric_timestamp() {
        let id = RaffleId::new();
        let result = format!("rifa_{id}_soon").parse::<ChargeTag>();
        assert!(matches!(result, Err(ChargeTagError::InvalidTimestamp(_))));
    }

    #[test]
    fn tag_has_expected_shape() {
        let id = RaffleId::new();
        let tag = ChargeTag::with_timestamp(id, 42);
        assert_eq!(tag.to_string(), format!("rifa_{id}_42"));
    }
}
