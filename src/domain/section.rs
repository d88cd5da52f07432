//! Sections: named buckets of items with rank-ordered rendering

use crate::domain::templates::Layout;
use crate::domain::{Item, RenderContext, Target};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const NEWS_ITEMS: &str = "newsitems";
pub const BRIEF_ITEMS: &str = "briefitems";
pub const ACTION_ITEMS: &str = "actionitems";
pub const TWO_COLUMN_ITEMS: &str = "twocolumnitems";

/// Sections in the order they appear in every rendered document
pub const STANDARD_SECTIONS: [&str; 4] = [NEWS_ITEMS, BRIEF_ITEMS, ACTION_ITEMS, TWO_COLUMN_ITEMS];

/// A named, input-ordered collection of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Section {
            name: name.to_string(),
            items: Vec::new(),
        }
    }

    /// Whether editor items of `item_type` belong here.
    ///
    /// Older editor forms used the singular type name ("newsitem").
    pub fn accepts(&self, item_type: &str) -> bool {
        self.name == item_type || self.name.strip_suffix('s') == Some(item_type)
    }

    /// Items shown for `target`, ordered by that target's rank.
    ///
    /// Items with an empty headline or a rank of zero or below are left out.
    /// Equal ranks keep their input order.
    pub fn ranked_items(&self, target: Target) -> Vec<&Item> {
        let mut ranked: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.is_rendered_for(target))
            .collect();
        ranked.sort_by_key(|item| item.rank_for(target));
        ranked
    }

    /// Email markup for the context's target, or nothing when no item qualifies
    pub fn render_email(&self, layout: &dyn Layout, ctx: &RenderContext) -> String {
        self.render_ranked(layout, ctx, ctx.target)
    }

    /// Web archive markup. The archive has a single ordering taken from the domestic ranks.
    pub fn render_web(&self, layout: &dyn Layout, ctx: &RenderContext) -> String {
        self.render_ranked(layout, ctx, Target::Domestic)
    }

    fn render_ranked(&self, layout: &dyn Layout, ctx: &RenderContext, order: Target) -> String {
        let ranked = self.ranked_items(order);

        let Some(first) = ranked.first() else {
            debug!(section = %self.name, target = %order, "section has no items to render");
            return String::new();
        };

        let mut output = layout.top(first, ctx);
        for (index, item) in ranked.iter().enumerate() {
            if index > 0 {
                output.push_str(&layout.divider(ctx));
            }
            output.push_str(&layout.item(item, ctx));
        }
        output.push_str(&layout.bottom(ctx));

        output
    }
}
