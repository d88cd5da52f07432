//! News in brief: an arrow list of linked headlines

use super::blocks::{section_heading, PURPLE};
use super::Layout;
use crate::domain::{Item, RenderContext};

pub struct BriefsEmail;

impl Layout for BriefsEmail {
    fn top(&self, _first: &Item, _ctx: &RenderContext) -> String {
        let heading = section_heading("News in Brief", "NEWS IN BRIEF", None);
        format!(
            r#"{heading}

<!-- BLOCK: News in Brief table -->
<table cellpadding="0" cellspacing="0" role="presentation" style="border-collapse: collapse;">
  <tbody>
    <tr>
      <td style="padding:40px 40px 40px 25px;">
        <table cellpadding="0" cellspacing="0" role="presentation" style="border-collapse: collapse;">
          <tbody>"#
        )
    }

    fn item(&self, item: &Item, ctx: &RenderContext) -> String {
        format!(
            r#"
<!-- BLOCK: News in Brief story -->
<tr>
  <td style="padding: 0 0 30px 0; font-size:18px; line-height:28px; color:{PURPLE};">→</td>
  <td style="padding: 0 0 30px 25px;"><a
      data-linkto="https://"
      href="{href}"
      style="color:{PURPLE}; text-decoration: underline; font-weight:normal; font-size:22px; line-height:28px;">
      {headline}
      </a></td>
</tr>"#,
            href = ctx.item_link(item, "headline"),
            headline = ctx.clean(&item.headline),
        )
    }

    fn bottom(&self, _ctx: &RenderContext) -> String {
        r#"
          </tbody>
        </table>
      </td>
    </tr>
  </tbody>
</table>"#
            .to_string()
    }
}

pub struct BriefsWeb;

impl Layout for BriefsWeb {
    fn top(&self, _first: &Item, _ctx: &RenderContext) -> String {
        r#"<h2 style="margin-top: 50px;">News in Brief</h2>"#.to_string()
    }

    fn item(&self, item: &Item, ctx: &RenderContext) -> String {
        format!(
            r#"
<article>
  <div>→</div>
  <div>
    <a data-linkto="https://" href="{url}">{headline}</a>
  </div>
</article>
"#,
            url = item.url,
            headline = ctx.clean(&item.headline),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Campaign, LinkTagger, Metadata, Placeholders, Rank, Target};

    fn render(f: impl FnOnce(&RenderContext) -> String) -> String {
        let metadata = Metadata::default();
        let campaign = Campaign {
            source: "src".to_string(),
            medium: "email".to_string(),
            name: "Purple Line".to_string(),
            date: "2025-07-17".to_string(),
        };
        let tagger = LinkTagger::new(campaign, &[]).unwrap();
        let placeholders = Placeholders {
            lead: "l".to_string(),
            secondary: "s".to_string(),
            two_column: "t".to_string(),
        };
        let ctx = RenderContext::new(Target::International, &metadata, &tagger, &placeholders);
        f(&ctx)
    }

    fn brief() -> Item {
        Item {
            headline: "Library\nreopens".to_string(),
            url: "https://x.edu/library".to_string(),
            international: Rank::new(1),
            ..Item::default()
        }
    }

    #[test]
    fn test_email_top_and_bottom_balance_tables() {
        let top = render(|ctx| BriefsEmail.top(&brief(), ctx));
        let bottom = render(|ctx| BriefsEmail.bottom(ctx));
        let opened = top.matches("<table").count();
        let closed = top.matches("</table>").count() + bottom.matches("</table>").count();
        assert_eq!(opened, closed);
        assert!(top.contains("NEWS IN BRIEF"));
    }

    #[test]
    fn test_email_rule_has_no_margin_cell() {
        let top = render(|ctx| BriefsEmail.top(&brief(), ctx));
        let rule = &top[top.find("NEWS IN BRIEF</div>").unwrap()..];
        assert!(rule.contains("height: 6px"));
        assert!(!rule.contains("stylingblock-content-margin-cell"));
        assert!(!top.contains("<!-- BLOCK: News in Brief rule -->"));
    }

    #[test]
    fn test_email_item_is_a_table_row() {
        let html = render(|ctx| BriefsEmail.item(&brief(), ctx));
        assert!(html.trim_start().starts_with("<!-- BLOCK: News in Brief story -->"));
        assert!(html.contains("<tr>"));
        assert!(html.contains("Library<br />reopens"));
        assert!(html.contains("Purple+Line+international"));
    }

    #[test]
    fn test_no_divider() {
        assert_eq!(render(|ctx| BriefsEmail.divider(ctx)), "");
        assert_eq!(render(|ctx| BriefsWeb.divider(ctx)), "");
    }

    #[test]
    fn test_web_item() {
        let html = render(|ctx| BriefsWeb.item(&brief(), ctx));
        assert!(html.contains(r#"href="https://x.edu/library">Library<br />reopens</a>"#));
    }
}
