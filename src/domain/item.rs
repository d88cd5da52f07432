//! Content items: the atomic unit of publishable content

use crate::domain::Target;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Priority of an item for one target. Lower is earlier; zero or below excludes the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rank(i64);

impl Rank {
    pub fn new(value: i64) -> Self {
        Rank(value)
    }

    /// Whether an item with this rank takes part in the output at all
    pub fn is_included(&self) -> bool {
        self.0 > 0
    }

    /// Parse a rank from a raw form value. Empty or non-numeric input is rank 0.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(value) => Rank(value),
            Err(_) => raw.parse::<f64>().map(Rank::from_float).unwrap_or_default(),
        }
    }

    /// Whole floats keep their value; fractional or non-finite ones are rank 0.
    fn from_float(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 {
            Rank(value as i64)
        } else {
            Rank(0)
        }
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRank {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rank = match Option::<RawRank>::deserialize(deserializer)? {
            Some(RawRank::Int(value)) => Rank(value),
            Some(RawRank::Float(value)) => Rank::from_float(value),
            None => Rank(0),
            Some(RawRank::Text(text)) => Rank::parse(&text),
        };
        Ok(rank)
    }
}

/// Deserialize a string field that the editor may have stored as `null`.
pub(crate) fn nullable_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One story, brief or link as entered by the editor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "nullable_string")]
    pub headline: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub url: String,
    #[serde(default)]
    pub domestic: Rank,
    #[serde(default)]
    pub international: Rank,
    #[serde(default, deserialize_with = "nullable_string")]
    pub cta: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub body: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub date_international: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub image_src: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub image_alt: String,
}

impl Item {
    /// Build an item from raw editor field values keyed by field name.
    ///
    /// Unknown field names are ignored and missing ones stay empty.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let text = |name: &str| fields.get(name).cloned().unwrap_or_default();
        let rank = |name: &str| fields.get(name).map(|v| Rank::parse(v)).unwrap_or_default();

        Item {
            headline: text("headline"),
            url: text("url"),
            domestic: rank("domestic"),
            international: rank("international"),
            cta: text("cta"),
            body: text("body"),
            date: text("date"),
            date_international: text("dateInternational"),
            image_src: text("imageSrc"),
            image_alt: text("imageAlt"),
        }
    }

    /// An empty slot whose ranks for both targets are `position`
    pub fn blank_slot(position: i64) -> Self {
        Item {
            domestic: Rank::new(position),
            international: Rank::new(position),
            ..Item::default()
        }
    }

    pub fn rank_for(&self, target: Target) -> Rank {
        match target {
            Target::Domestic => self.domestic,
            Target::International => self.international,
        }
    }

    /// Whether this item appears in the output ordered by `target`'s ranks
    pub fn is_rendered_for(&self, target: Target) -> bool {
        !self.headline.is_empty() && self.rank_for(target).is_included()
    }
}
