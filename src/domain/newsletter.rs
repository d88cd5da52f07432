//! Newsletter composer: header, sections in order, footer

use crate::domain::templates::{chrome, TemplateTable};
use crate::domain::{Content, LinkTagger, Placeholders, RenderContext, Target};
use tracing::debug;

/// Assembles full documents from a content snapshot
pub struct Newsletter<'a> {
    table: &'a TemplateTable,
    tagger: &'a LinkTagger,
    placeholders: &'a Placeholders,
}

impl<'a> Newsletter<'a> {
    pub fn new(
        table: &'a TemplateTable,
        tagger: &'a LinkTagger,
        placeholders: &'a Placeholders,
    ) -> Self {
        Newsletter {
            table,
            tagger,
            placeholders,
        }
    }

    /// Complete email document for one distribution target.
    ///
    /// Sections that have nothing to show for `target` contribute nothing.
    pub fn render(&self, content: &Content, target: Target) -> String {
        let ctx = self.context(content, target);
        let mut output = chrome::email_header(&ctx.publication_date());

        for section in &content.sections {
            let html = section.render_email(self.table.email(&section.name), &ctx);
            debug!(section = %section.name, %target, bytes = html.len(), "rendered email section");
            output.push_str(&html);
        }

        output.push_str(chrome::EMAIL_FOOTER);
        output
    }

    /// Web archive fragment. No header or footer is added.
    pub fn render_web(&self, content: &Content) -> String {
        let ctx = self.context(content, Target::Domestic);
        content
            .sections
            .iter()
            .map(|section| section.render_web(self.table.web(&section.name), &ctx))
            .collect()
    }

    fn context<'c>(&'c self, content: &'c Content, target: Target) -> RenderContext<'c> {
        RenderContext::new(target, &content.metadata, self.tagger, self.placeholders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::{ACTION_ITEMS, BRIEF_ITEMS, NEWS_ITEMS, TWO_COLUMN_ITEMS};
    use crate::domain::templates::{Blank, Layout, SectionTemplates};
    use crate::domain::{Campaign, Item, Rank};

    fn tagger(date: &str) -> LinkTagger {
        let campaign = Campaign {
            source: "SFMC Purple Line Email".to_string(),
            medium: "email".to_string(),
            name: "Purple Line".to_string(),
            date: date.to_string(),
        };
        LinkTagger::new(
            campaign,
            &["alumni.northwestern".to_string(), "our.northwestern".to_string()],
        )
        .unwrap()
    }

    fn placeholders() -> Placeholders {
        Placeholders {
            lead: "https://img/lead.png".to_string(),
            secondary: "https://img/secondary.png".to_string(),
            two_column: "https://img/two.png".to_string(),
        }
    }

    fn item(headline: &str, domestic: i64, international: i64) -> Item {
        Item {
            headline: headline.to_string(),
            url: format!("https://news.northwestern.edu/{}", headline.to_lowercase()),
            domestic: Rank::new(domestic),
            international: Rank::new(international),
            ..Item::default()
        }
    }

    fn sample() -> Content {
        let mut content = Content::standard();
        content.metadata.date = "2025-07-17".to_string();
        content.section_mut(NEWS_ITEMS).unwrap().items =
            vec![item("Alpha", 2, 0), item("Bravo", 1, 1), item("Charlie", 0, 2)];
        content.section_mut(BRIEF_ITEMS).unwrap().items = vec![item("Delta", 1, 0)];
        content
    }

    #[test]
    fn test_render_substitutes_date_and_wraps_chrome() {
        let table = TemplateTable::standard();
        let content = sample();
        let tagger = tagger(&content.metadata.date);
        let placeholders = placeholders();
        let html = Newsletter::new(&table, &tagger, &placeholders).render(&content, Target::Domestic);

        assert!(html.contains("July 17, 2025"));
        assert!(!html.contains(chrome::DATE_PLACEHOLDER));
        assert!(html.trim_start().starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with(chrome::EMAIL_FOOTER));
    }

    #[test]
    fn test_render_orders_and_filters_by_target() {
        let table = TemplateTable::standard();
        let content = sample();
        let tagger = tagger(&content.metadata.date);
        let placeholders = placeholders();
        let newsletter = Newsletter::new(&table, &tagger, &placeholders);

        let domestic = newsletter.render(&content, Target::Domestic);
        let bravo = domestic.find("Bravo").unwrap();
        let alpha = domestic.find("Alpha").unwrap();
        assert!(bravo < alpha);
        assert!(!domestic.contains("Charlie"));
        assert!(domestic.contains("NEWS IN BRIEF"));

        let international = newsletter.render(&content, Target::International);
        assert!(international.find("Bravo").unwrap() < international.find("Charlie").unwrap());
        assert!(!international.contains("Alpha"));
        assert!(!international.contains("NEWS IN BRIEF"));
        assert!(international.contains("2025-07-17+Purple+Line+international"));
    }

    #[test]
    fn test_empty_content_is_just_chrome() {
        let table = TemplateTable::standard();
        let content = Content::standard();
        let tagger = tagger("");
        let placeholders = placeholders();
        let html = Newsletter::new(&table, &tagger, &placeholders).render(&content, Target::Domestic);

        assert_eq!(html, format!("{}{}", chrome::email_header(""), chrome::EMAIL_FOOTER));
    }

    #[test]
    fn test_render_web_has_no_chrome_and_uses_domestic_order() {
        let table = TemplateTable::standard();
        let content = sample();
        let tagger = tagger(&content.metadata.date);
        let placeholders = placeholders();
        let html = Newsletter::new(&table, &tagger, &placeholders).render_web(&content);

        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(!html.contains(chrome::DATE_PLACEHOLDER));
        assert!(html.find("Bravo").unwrap() < html.find("Alpha").unwrap());
        assert!(!html.contains("Charlie"));
        assert!(html.contains("News in Brief"));
        assert!(!html.contains("utm_"));
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        struct Name(&'static str);
        impl Layout for Name {
            fn item(&self, _item: &Item, _ctx: &RenderContext) -> String {
                format!("<{}>", self.0)
            }
        }

        let mut table = TemplateTable::new();
        for name in [NEWS_ITEMS, BRIEF_ITEMS, ACTION_ITEMS, TWO_COLUMN_ITEMS] {
            table.register(name, SectionTemplates::new(Blank, Name(name)));
        }

        let mut content = Content::standard();
        for section in content.sections.iter_mut().rev() {
            section.items.push(item("X", 1, 1));
        }
        let tagger = tagger("");
        let placeholders = placeholders();
        let html = Newsletter::new(&table, &tagger, &placeholders).render_web(&content);

        assert_eq!(
            html,
            "<newsitems><briefitems><actionitems><twocolumnitems>"
        );
    }

    #[test]
    fn test_merge_fields_pass_through() {
        let table = TemplateTable::standard();
        let mut content = Content::standard();
        content.section_mut(NEWS_ITEMS).unwrap().items = vec![Item {
            headline: "Hello ##First Name##".to_string(),
            body: "Dear %%FirstName%%,".to_string(),
            domestic: Rank::new(1),
            ..Item::default()
        }];
        let tagger = tagger("");
        let placeholders = placeholders();
        let html = Newsletter::new(&table, &tagger, &placeholders).render(&content, Target::Domestic);

        assert!(html.contains("Hello ##First Name##"));
        assert!(html.contains("Dear %%FirstName%%,"));
    }

    #[test]
    fn test_tracked_links_in_body_are_tagged() {
        let table = TemplateTable::standard();
        let mut content = Content::standard();
        content.metadata.date = "2025-07-17".to_string();
        content.section_mut(NEWS_ITEMS).unwrap().items = vec![Item {
            headline: "Reunion".to_string(),
            body: r#"Register at <a href="https://alumni.northwestern.edu/reunion">the site</a>"#
                .to_string(),
            domestic: Rank::new(1),
            ..Item::default()
        }];
        let tagger = tagger(&content.metadata.date);
        let placeholders = placeholders();
        let html = Newsletter::new(&table, &tagger, &placeholders).render(&content, Target::Domestic);

        assert!(html.contains(
            "https://alumni.northwestern.edu/reunion?utm_medium=email&utm_source=SFMC+Purple+Line+Email&utm_campaign=2025-07-17+Purple+Line"
        ));
    }
}
