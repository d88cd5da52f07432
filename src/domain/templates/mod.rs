//! Rendering strategy table
//!
//! Each section type has one [`Layout`] per output family (email and web).
//! A layout supplies the four pieces a section is assembled from: `top`
//! (given the highest-ranked item), one `item` per ranked item, a `divider`
//! between consecutive items and a closing `bottom`. Any piece may be empty.

mod actions;
mod blocks;
mod briefs;
pub mod chrome;
mod news;
mod two_column;

use crate::domain::section::{ACTION_ITEMS, BRIEF_ITEMS, NEWS_ITEMS, TWO_COLUMN_ITEMS};
use crate::domain::{Item, RenderContext};
use std::collections::HashMap;

pub use actions::{ActionsEmail, ActionsWeb};
pub use briefs::{BriefsEmail, BriefsWeb};
pub use news::{NewsEmail, NewsWeb};
pub use two_column::{TwoColumnEmail, TwoColumnWeb};

/// Markup pieces for one section in one output family
pub trait Layout: Send + Sync {
    fn top(&self, _first: &Item, _ctx: &RenderContext) -> String {
        String::new()
    }

    fn item(&self, _item: &Item, _ctx: &RenderContext) -> String {
        String::new()
    }

    fn divider(&self, _ctx: &RenderContext) -> String {
        String::new()
    }

    fn bottom(&self, _ctx: &RenderContext) -> String {
        String::new()
    }
}

/// Layout that renders nothing at all
#[derive(Debug, Default, Clone, Copy)]
pub struct Blank;

impl Layout for Blank {}

/// The email and web layouts of one section
pub struct SectionTemplates {
    pub email: Box<dyn Layout>,
    pub web: Box<dyn Layout>,
}

impl SectionTemplates {
    pub fn new(email: impl Layout + 'static, web: impl Layout + 'static) -> Self {
        SectionTemplates {
            email: Box::new(email),
            web: Box::new(web),
        }
    }
}

/// Section name → layouts. Sections without an entry render as [`Blank`].
#[derive(Default)]
pub struct TemplateTable {
    sections: HashMap<String, SectionTemplates>,
}

impl TemplateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layouts of the Purple Line newsletter
    pub fn standard() -> Self {
        let mut table = TemplateTable::new();
        table.register(NEWS_ITEMS, SectionTemplates::new(NewsEmail, NewsWeb));
        table.register(BRIEF_ITEMS, SectionTemplates::new(BriefsEmail, BriefsWeb));
        table.register(ACTION_ITEMS, SectionTemplates::new(ActionsEmail, ActionsWeb));
        table.register(
            TWO_COLUMN_ITEMS,
            SectionTemplates::new(TwoColumnEmail, TwoColumnWeb),
        );
        table
    }

    pub fn register(&mut self, name: &str, templates: SectionTemplates) {
        self.sections.insert(name.to_string(), templates);
    }

    pub fn email(&self, name: &str) -> &dyn Layout {
        self.sections
            .get(name)
            .map(|t| t.email.as_ref())
            .unwrap_or(&Blank)
    }

    pub fn web(&self, name: &str) -> &dyn Layout {
        self.sections
            .get(name)
            .map(|t| t.web.as_ref())
            .unwrap_or(&Blank)
    }
}
