//! Daily service type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of daily service a vehicle (and driver) performs.
///
/// Determines whether overtime can accrue. The contracted regular-hours
/// threshold is supplied separately by the caller (see
/// [`ConfigLoader::regular_hours_for`](crate::config::ConfigLoader::regular_hours_for)).
///
/// # Example
///
/// ```
/// use workday_engine::models::DailyType;
///
/// let daily_type: DailyType = serde_json::from_str("\"disposition_10\"").unwrap();
/// assert_eq!(daily_type, DailyType::Disposition10);
/// assert!(!daily_type.is_transfer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DailyType {
    /// Point-to-point transfer. Never accrues overtime.
    #[serde(rename = "transfer")]
    Transfer,
    /// Vehicle at disposal with a 10 hour contracted day.
    #[serde(rename = "disposition_10")]
    Disposition10,
    /// Vehicle at disposal with a 12 hour contracted day.
    #[serde(rename = "disposition_12")]
    Disposition12,
}

impl DailyType {
    /// Returns true for the transfer service type.
    pub fn is_transfer(&self) -> bool {
        *self == DailyType::Transfer
    }

    /// Returns the wire name of the type (e.g. `"disposition_10"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DailyType::Transfer => "transfer",
            DailyType::Disposition10 => "disposition_10",
            DailyType::Disposition12 => "disposition_12",
        }
    }
}

impl fmt::Display for DailyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&DailyType::Transfer).unwrap(),
            "\"transfer\""
        );
        assert_eq!(
            serde_json::to_string(&DailyType::Disposition12).unwrap(),
            "\"disposition_12\""
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        for daily_type in [
            DailyType::Transfer,
            DailyType::Disposition10,
            DailyType::Disposition12,
        ] {
            let json = serde_json::to_string(&daily_type).unwrap();
            assert_eq!(json.trim_matches('"'), daily_type.to_string());
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<DailyType, _> = serde_json::from_str("\"hourly\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_transfer() {
        assert!(DailyType::Transfer.is_transfer());
        assert!(!DailyType::Disposition10.is_transfer());
        assert!(!DailyType::Disposition12.is_transfer());
    }
}
