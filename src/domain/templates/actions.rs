//! Alumni in action: section heading, secondary photo, full stories

use super::blocks::{photo, section_heading, story, web_article};
use super::Layout;
use crate::domain::context::attr;
use crate::domain::{Item, RenderContext};

pub struct ActionsEmail;

impl Layout for ActionsEmail {
    fn top(&self, first: &Item, ctx: &RenderContext) -> String {
        let heading =
            section_heading("Alumni in Action", "ALUMNI IN ACTION", Some("0px 0px 40px"));
        let image = photo(
            "Secondary image",
            "0px 0px 40px",
            &ctx.item_link(first, "photo"),
            ctx.secondary_image(),
            &ctx.metadata.image_secondary_alt,
            (550, 350),
        );
        format!("{heading}\n{image}")
    }

    fn item(&self, item: &Item, ctx: &RenderContext) -> String {
        story("Alumni in Action", item, ctx)
    }
}

pub struct ActionsWeb;

impl Layout for ActionsWeb {
    fn top(&self, _first: &Item, ctx: &RenderContext) -> String {
        format!(
            r#"
<h2 style="margin-top: 50px;">Alumni in Action</h2>
<figure>
  <img src="{src}" alt="{alt}">
</figure>"#,
            src = ctx.secondary_image(),
            alt = attr(&ctx.metadata.image_secondary_alt),
        )
    }

    fn item(&self, item: &Item, _ctx: &RenderContext) -> String {
        web_article(item)
    }
}
