use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordering of a list on its board or a card in its list.
///
/// Trello reports positions as numbers but also accepts `top` and `bottom`
/// when writing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Top,
    Bottom,
    At(f64),
}

impl Position {
    pub fn is_valid(&self) -> bool {
        match self {
            Position::Top | Position::Bottom => true,
            Position::At(value) => value.is_finite() && *value > 0.0,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Position::At(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Top => write!(f, "top"),
            Position::Bottom => write!(f, "bottom"),
            Position::At(value) => write!(f, "{}", value),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Position::Top => serializer.serialize_str("top"),
            Position::Bottom => serializer.serialize_str("bottom"),
            Position::At(value) => serializer.serialize_f64(*value),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPosition {
    Number(f64),
    Named(String),
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawPosition::deserialize(deserializer)? {
            RawPosition::Number(value) => Ok(Position::At(value)),
            RawPosition::Named(name) => match name.to_ascii_lowercase().as_str() {
                "top" => Ok(Position::Top),
                "bottom" => Ok(Position::Bottom),
                other => other
                    .parse::<f64>()
                    .map(Position::At)
                    .map_err(|_| serde::de::Error::custom(format!("invalid position: {}", name))),
            },
        }
    }
}
