//! Everything a section template needs besides the item itself

use crate::domain::{clean_text, format_publication_date, Item, LinkTagger, Metadata, Target};

/// Fallback image URLs for slots the editor left empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub lead: String,
    pub secondary: String,
    pub two_column: String,
}

/// Explicit inputs of one rendering pass
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub target: Target,
    pub metadata: &'a Metadata,
    pub tagger: &'a LinkTagger,
    pub placeholders: &'a Placeholders,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        target: Target,
        metadata: &'a Metadata,
        tagger: &'a LinkTagger,
        placeholders: &'a Placeholders,
    ) -> Self {
        RenderContext {
            target,
            metadata,
            tagger,
            placeholders,
        }
    }

    /// Human-readable publication date, empty when the date is missing or invalid
    pub fn publication_date(&self) -> String {
        format_publication_date(&self.metadata.date)
    }

    /// Item URL tagged for the current target, recording which element links to it
    pub fn item_link(&self, item: &Item, element: &str) -> String {
        self.tagger
            .tag_url(&item.url, Some(self.target), Some(element))
    }

    pub fn clean(&self, raw: &str) -> String {
        clean_text(raw, self.tagger)
    }

    pub fn lead_image(&self) -> &str {
        or_placeholder(&self.metadata.image_lead, &self.placeholders.lead)
    }

    pub fn secondary_image(&self) -> &str {
        or_placeholder(&self.metadata.image_secondary, &self.placeholders.secondary)
    }

    pub fn two_column_image<'i>(&'i self, item: &'i Item) -> &'i str {
        or_placeholder(&item.image_src, &self.placeholders.two_column)
    }
}

fn or_placeholder<'s>(value: &'s str, placeholder: &'s str) -> &'s str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Campaign;

    fn placeholders() -> Placeholders {
        Placeholders {
            lead: "lead.png".to_string(),
            secondary: "secondary.png".to_string(),
            two_column: "two.png".to_string(),
        }
    }

    fn tagger() -> LinkTagger {
        let campaign = Campaign {
            source: "src".to_string(),
            medium: "email".to_string(),
            name: "Purple Line".to_string(),
            date: "2025-07-17".to_string(),
        };
        LinkTagger::new(campaign, &[]).unwrap()
    }

    #[test]
    fn test_missing_images_use_placeholders() {
        let metadata = Metadata::default();
        let tagger = tagger();
        let placeholders = placeholders();
        let ctx = RenderContext::new(Target::Domestic, &metadata, &tagger, &placeholders);

        assert_eq!(ctx.lead_image(), "lead.png");
        assert_eq!(ctx.secondary_image(), "secondary.png");
        assert_eq!(ctx.two_column_image(&Item::default()), "two.png");
    }

    #[test]
    fn test_present_images_win() {
        let metadata = Metadata {
            image_lead: "hero.jpg".to_string(),
            ..Metadata::default()
        };
        let tagger = tagger();
        let placeholders = placeholders();
        let ctx = RenderContext::new(Target::Domestic, &metadata, &tagger, &placeholders);
        let item = Item {
            image_src: "col.jpg".to_string(),
            ..Item::default()
        };

        assert_eq!(ctx.lead_image(), "hero.jpg");
        assert_eq!(ctx.two_column_image(&item), "col.jpg");
    }

    #[test]
    fn test_item_link_carries_target() {
        let metadata = Metadata::default();
        let tagger = tagger();
        let placeholders = placeholders();
        let ctx = RenderContext::new(Target::International, &metadata, &tagger, &placeholders);
        let item = Item {
            url: "https://x.edu/story".to_string(),
            ..Item::default()
        };

        let link = ctx.item_link(&item, "headline");
        assert!(link.contains("Purple+Line+international"));
        assert!(link.ends_with("utm_content=headline"));
    }

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(attr(r#"The "L" & more"#), "The &quot;L&quot; &amp; more");
    }
}
