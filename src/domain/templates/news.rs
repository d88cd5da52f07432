//! Top stories: lead photo, then full stories separated by grey rules

use super::blocks::{grey_rule, photo, spacer, story, web_article};
use super::Layout;
use crate::domain::context::attr;
use crate::domain::{Item, RenderContext};

const LOGO_SRC: &str = "https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1/ba67cb5b-1eff-4b98-9153-d59291344ab2.png";
const PROFILE_URL: &str = "https://our.northwestern.edu/ascendportal/s/";

pub struct NewsEmail;

impl Layout for NewsEmail {
    fn top(&self, first: &Item, ctx: &RenderContext) -> String {
        photo(
            "Lead image",
            "0px 0px 40px",
            &ctx.item_link(first, "photo"),
            ctx.lead_image(),
            &ctx.metadata.image_lead_alt,
            (600, 375),
        )
    }

    fn item(&self, item: &Item, ctx: &RenderContext) -> String {
        story("Story", item, ctx)
    }

    fn divider(&self, _ctx: &RenderContext) -> String {
        grey_rule("Divider", "0px 25px 40px 25px")
    }

    fn bottom(&self, _ctx: &RenderContext) -> String {
        spacer("25px Spacer", "0px 0px 25px 0px")
    }
}

pub struct NewsWeb;

impl Layout for NewsWeb {
    fn top(&self, _first: &Item, ctx: &RenderContext) -> String {
        format!(
            r#"
<p class="note">The <em>Purple Line</em> newsletter brings you top stories from Northwestern, ways to stay connected, upcoming events, and more. Ensure that you receive the monthly email by <a href="{PROFILE_URL}">updating your information</a> with us.</p>
<figure class="logo">
  <img src="{LOGO_SRC}"
    alt="Purple Line Hero"
    width="100%">
</figure>
<p>News for Our Northwestern Alumni Community</p>
<p class="pl-date">{date}</p>
<figure>
  <img src="{src}" width="600" alt="{alt}">
</figure>"#,
            date = ctx.publication_date(),
            src = ctx.lead_image(),
            alt = attr(&ctx.metadata.image_lead_alt),
        )
    }

    fn item(&self, item: &Item, _ctx: &RenderContext) -> String {
        web_article(item)
    }

    fn divider(&self, _ctx: &RenderContext) -> String {
        r#"<hr style="margin: 50px 0; border: .5px solid rgb(128 128 128);">"#.to_string()
    }
}
