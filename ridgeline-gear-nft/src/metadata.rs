use cosmwasm_schema::cw_serde;

use crate::error::ContractError;

/// Condition every piece of gear starts out with.
pub const DEFAULT_CONDITION: u32 = 100;
/// Rarity assigned at mint, until the owner grades the item.
pub const UNGRADED_RARITY: &str = "Undefined";

/// On-chain gameplay attributes of a gear NFT.
///
/// Stored structured; the delimited text form (`render`/`parse`) exists only
/// at the query boundary and is never mutated in place.
#[cw_serde]
pub struct GearAttributes {
    pub gear_type: String,
    pub xp: u32,
    pub magnitude: u32,
    pub condition: u32,
    pub rarity: String,
}

impl GearAttributes {
    /// Attributes of a freshly minted item of the given type.
    pub fn new(gear_type: impl Into<String>) -> Self {
        GearAttributes {
            gear_type: gear_type.into(),
            xp: 0,
            magnitude: 0,
            condition: DEFAULT_CONDITION,
            rarity: UNGRADED_RARITY.to_string(),
        }
    }

    /// Canonical text form, served as the query segment of `token_uri`:
    /// `{gear_type},XP={xp},MAG={magnitude},CONDITION={condition},RARITY={rarity}`
    pub fn render(&self) -> String {
        format!(
            "{},XP={},MAG={},CONDITION={},RARITY={}",
            self.gear_type, self.xp, self.magnitude, self.condition, self.rarity
        )
    }

    /// Inverse of [`render`](Self::render). Accepts `Magnitude=` as a legacy
    /// alias for `MAG=`. Segment order beyond the leading gear type does not
    /// matter; every key must be present exactly once.
    pub fn parse(text: &str) -> Result<Self, ContractError> {
        let mut segments = text.split(',');

        let gear_type = match segments.next() {
            Some(s) if !s.is_empty() && !s.contains('=') => s.to_string(),
            _ => {
                return Err(ContractError::MalformedRecord {
                    reason: "missing gear type segment".to_string(),
                })
            }
        };

        let mut xp: Option<u32> = None;
        let mut magnitude: Option<u32> = None;
        let mut condition: Option<u32> = None;
        let mut rarity: Option<String> = None;

        for segment in segments {
            if let Some(v) = segment.strip_prefix("XP=") {
                xp = Some(parse_numeric("XP", v)?);
            } else if let Some(v) = segment
                .strip_prefix("MAG=")
                .or_else(|| segment.strip_prefix("Magnitude="))
            {
                magnitude = Some(parse_numeric("MAG", v)?);
            } else if let Some(v) = segment.strip_prefix("CONDITION=") {
                condition = Some(parse_numeric("CONDITION", v)?);
            } else if let Some(v) = segment.strip_prefix("RARITY=") {
                rarity = Some(v.to_string());
            } else {
                return Err(ContractError::MalformedRecord {
                    reason: format!("unrecognized segment: {segment}"),
                });
            }
        }

        Ok(GearAttributes {
            gear_type,
            xp: require_key("XP", xp)?,
            magnitude: require_key("MAG", magnitude)?,
            condition: require_key("CONDITION", condition)?,
            rarity: require_key("RARITY", rarity)?,
        })
    }
}

fn parse_numeric(key: &str, value: &str) -> Result<u32, ContractError> {
    value.parse().map_err(|_| ContractError::MalformedRecord {
        reason: format!("{key} value is not a number: {value}"),
    })
}

fn require_key<T>(key: &str, value: Option<T>) -> Result<T, ContractError> {
    value.ok_or_else(|| ContractError::MalformedRecord {
        reason: format!("missing {key} segment"),
    })
}
