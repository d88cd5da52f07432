//! Campaign tracking for outbound links
//!
//! Every link that leaves the newsletter carries `utm_medium`, `utm_source` and
//! `utm_campaign` parameters (plus `utm_content` for item links). Tagging never
//! adds a parameter whose name already appears in the URL, so running a URL
//! through the tagger twice yields the same string.

use crate::domain::Target;
use crate::error::{PurpleLineError, Result};
use regex::{Captures, Regex};
use url::form_urlencoded;

/// Campaign identity shared by every tagged link in one rendering pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    /// `utm_source` value (e.g. "SFMC Purple Line Email")
    pub source: String,
    /// `utm_medium` value (e.g. "email")
    pub medium: String,
    /// Newsletter name used in the campaign label (e.g. "Purple Line")
    pub name: String,
    /// Raw publication date as entered by the editor (YYYY-MM-DD)
    pub date: String,
}

impl Campaign {
    /// Campaign label: "<date> <name>", followed by the target when one is given.
    pub fn label(&self, target: Option<Target>) -> String {
        match target {
            Some(target) => format!("{} {} {}", self.date, self.name, target),
            None => format!("{} {}", self.date, self.name),
        }
    }
}

/// Appends campaign parameters to item URLs and to links inside free text
#[derive(Debug, Clone)]
pub struct LinkTagger {
    campaign: Campaign,
    tracked_links: Option<Regex>,
}

impl LinkTagger {
    /// Create a tagger that rewrites links pointing at any of `domains`.
    ///
    /// Domains are matched as plain substrings of the href, case-insensitively.
    pub fn new(campaign: Campaign, domains: &[String]) -> Result<Self> {
        let alternatives: Vec<String> = domains
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(regex::escape)
            .collect();

        let tracked_links = if alternatives.is_empty() {
            None
        } else {
            let pattern = format!(r#"(?i)href="[^"]*(?:{})[^"]*"#, alternatives.join("|"));
            Some(Regex::new(&pattern).map_err(|e| {
                PurpleLineError::Config(format!("Invalid tracking domain list: {}", e))
            })?)
        };

        Ok(LinkTagger {
            campaign,
            tracked_links,
        })
    }

    /// Tag an item URL for `target`, optionally recording which element was clicked.
    pub fn tag_url(&self, url: &str, target: Option<Target>, content: Option<&str>) -> String {
        let mut output = url.to_string();

        append_param(&mut output, "utm_medium", &self.campaign.medium);
        append_param(&mut output, "utm_source", &self.campaign.source);
        append_param(&mut output, "utm_campaign", &self.campaign.label(target));

        if let Some(content) = content.filter(|c| !c.is_empty()) {
            append_param(&mut output, "utm_content", content);
        }

        output
    }

    /// Tag every `href` in an HTML fragment that points at a tracked domain.
    ///
    /// Links to other hosts are left untouched. No `utm_content` is added.
    pub fn tag_links(&self, html: &str) -> String {
        match &self.tracked_links {
            Some(regex) => regex
                .replace_all(html, |caps: &Captures| self.tag_url(&caps[0], None, None))
                .into_owned(),
            None => html.to_string(),
        }
    }
}

/// Append `name=value` unless `name` already occurs anywhere in `url`.
fn append_param(url: &mut String, name: &str, value: &str) {
    if url.to_ascii_lowercase().contains(name) {
        return;
    }

    if !(url.ends_with('?') || url.ends_with('&')) {
        url.push(if url.contains('?') { '&' } else { '?' });
    }

    url.push_str(name);
    url.push('=');
    url.extend(form_urlencoded::byte_serialize(value.as_bytes()));
}
