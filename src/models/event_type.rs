use ansi_term::Colour;
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

/// Category of an event. Only drives presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Work,
    Personal,
    Other,
}

/// Colour token used when an event has no (or an unknown) type.
pub const DEFAULT_COLOR_TOKEN: &str = "gray";

impl EventType {
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" => Some(Self::Work),
            "personal" => Some(Self::Personal),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::Work => "work",
            EventType::Personal => "personal",
            EventType::Other => "other",
        }
    }
}

/// Map an (optional) event type to its colour token.
pub fn color_token(kind: Option<EventType>) -> &'static str {
    match kind {
        Some(EventType::Work) => "blue",
        Some(EventType::Personal) => "green",
        Some(EventType::Other) => "yellow",
        None => DEFAULT_COLOR_TOKEN,
    }
}

/// Terminal colour for a colour token.
pub fn token_colour(token: &str) -> Colour {
    match token {
        "blue" => Colour::Blue,
        "green" => Colour::Green,
        "yellow" => Colour::Yellow,
        _ => Colour::Fixed(245),
    }
}

/// Reads the `type` field leniently: unknown strings become `None`
/// instead of rejecting the whole collection.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<EventType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(EventType::et_from_str))
}
