//! The content document: newsletter metadata plus every section's items

use crate::domain::item::nullable_string;
use crate::domain::section::STANDARD_SECTIONS;
use crate::domain::{Item, Section};
use crate::error::{PurpleLineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Free-text fields describing the issue as a whole
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Publication date as entered (YYYY-MM-DD)
    #[serde(default, deserialize_with = "nullable_string")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub subject: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub subject_international: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub preheader: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub preheader_international: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub image_lead: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub image_lead_alt: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub image_secondary: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub image_secondary_alt: String,
}

/// Root of the content model, saved wholesale as `purpleline.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Raw editor field values captured at resync time
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorForm {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(default)]
    pub items: Vec<FormItem>,
}

/// One item block of the editor form: its section type and named field values
#[derive(Debug, Clone, Deserialize)]
pub struct FormItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Default for Content {
    fn default() -> Self {
        Content::standard()
    }
}

impl Content {
    /// Empty content with the standard sections in publication order
    pub fn standard() -> Self {
        Content {
            metadata: Metadata::default(),
            sections: STANDARD_SECTIONS.iter().map(|name| Section::new(name)).collect(),
        }
    }

    /// Parse a saved content document.
    ///
    /// Standard sections missing from the document are added empty so every
    /// content type always has exactly one section.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: Content =
            serde_json::from_str(json).map_err(|e| PurpleLineError::Content(e.to_string()))?;
        Ok(content.normalized())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Rebuild the model from the editor form.
    ///
    /// Metadata is replaced and every section's items are replaced wholesale by
    /// the form entries of that section's type, in form order. Entries whose
    /// type names no section are dropped.
    pub fn resync(&mut self, form: &EditorForm) {
        self.metadata = form.metadata.clone();

        let mut rebuilt: Vec<Vec<Item>> = vec![Vec::new(); self.sections.len()];
        for entry in &form.items {
            match self
                .sections
                .iter()
                .position(|s| s.accepts(&entry.item_type))
            {
                Some(index) => rebuilt[index].push(Item::from_fields(&entry.fields)),
                None => debug!(item_type = %entry.item_type, "ignoring form item with unknown type"),
            }
        }

        for (section, items) in self.sections.iter_mut().zip(rebuilt) {
            section.items = items;
        }
    }

    /// A cleared copy: empty metadata and blank item slots numbered 1..n per section.
    pub fn cleared(&self) -> Self {
        Content {
            metadata: Metadata::default(),
            sections: self
                .sections
                .iter()
                .map(|section| Section {
                    name: section.name.clone(),
                    items: (1..=section.items.len() as i64).map(Item::blank_slot).collect(),
                })
                .collect(),
        }
    }

    /// Standard sections first in publication order, then any others.
    /// Later duplicates of a section name are dropped.
    pub fn normalized(self) -> Self {
        let mut remaining = self.sections;
        let mut sections = Vec::with_capacity(remaining.len().max(STANDARD_SECTIONS.len()));

        for name in STANDARD_SECTIONS {
            match remaining.iter().position(|s| s.name == name) {
                Some(index) => sections.push(remaining.remove(index)),
                None => sections.push(Section::new(name)),
            }
        }

        for section in remaining {
            if sections.iter().any(|s| s.name == section.name) {
                warn!(section = %section.name, "dropping duplicate section");
            } else {
                sections.push(section);
            }
        }

        Content {
            metadata: self.metadata,
            sections,
        }
    }
}
