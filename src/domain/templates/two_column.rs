//! Two-column features: square photo on the left, story on the right

use super::blocks::{grey_rule, spacer, PURPLE};
use super::Layout;
use crate::domain::context::attr;
use crate::domain::{Item, RenderContext};

pub struct TwoColumnEmail;

impl Layout for TwoColumnEmail {
    fn top(&self, _first: &Item, _ctx: &RenderContext) -> String {
        grey_rule("Two column rule", "0px 25px 50px")
    }

    fn item(&self, item: &Item, ctx: &RenderContext) -> String {
        let photo_href = ctx.item_link(item, "photo");
        let headline_href = ctx.item_link(item, "headline");
        let button_href = ctx.item_link(item, "button");
        let src = ctx.two_column_image(item);
        let alt = attr(&item.image_alt);
        let headline = ctx.clean(&item.headline);
        let body = ctx.clean(&item.body);
        let cta = ctx.clean(&item.cta);

        format!(
            r#"
<!-- BLOCK: 2-column story with photo -->
<table cellpadding="0" cellspacing="0" width="100%"
  role="presentation" style="min-width: 100%; "
  class="stylingblock-content-wrapper">
  <tbody>
    <tr>
      <td style="padding: 0 25px;" class="stylingblock-content-wrapper camarker-inner">
        <table cellspacing="0" cellpadding="0" role="presentation" style="width: 100%;">
          <tbody>
            <tr>
              <td>
                <table cellspacing="0" cellpadding="0" role="presentation" style="width: 100%;">
                  <tbody>
                    <tr>
                      <td valign="top" class="responsive-td" style="width: 45%; padding-right: 25px;">
                        <table cellpadding="0" cellspacing="0"
                          width="100%" role="presentation"
                          style="min-width: 100%; "
                          class="stylingblock-content-wrapper">
                          <tbody>
                            <tr>
                              <td class="stylingblock-content-wrapper camarker-inner">
                                <table width="100%" cellspacing="0" cellpadding="0" role="presentation">
                                  <tbody>
                                    <tr>
                                      <td align="left" style="padding-bottom:15px;"><a
                                          href="{photo_href}"
                                          data-linkto="http://"><img
                                            src="{src}"
                                            alt="{alt}"
                                            height="220"
                                            width="220"
                                            style="display: block; padding: 0px; text-align: center; height: 220px; width: 220px; border: 0px;"></a>
                                      </td>
                                    </tr>
                                  </tbody>
                                </table>
                              </td>
                            </tr>
                          </tbody>
                        </table>
                      </td>
                      <!-- Right column -->
                      <td valign="top" class="responsive-td" style="width: 55%; padding: 0;">
                        <table cellpadding="0" cellspacing="0"
                          width="100%" role="presentation"
                          class="stylingblock-content-wrapper"
                          style="min-width: 100%; ">
                          <tbody>
                            <tr>
                              <td class="stylingblock-content-margin-cell" style="padding: 0px;">
                                <table cellpadding="0"
                                  cellspacing="0" width="100%"
                                  role="presentation"
                                  style="background-color: transparent; min-width: 100%; "
                                  class="stylingblock-content-wrapper">
                                  <tbody>
                                    <tr>
                                      <td style="padding: 0px;" class="stylingblock-content-wrapper camarker-inner">
                                        <p style="font-family:Arial,Helvetica,sans-serif; font-weight:bold; font-size:22px; line-height:28px; color:{PURPLE}; margin: 8px 0 3px 0;">
                                          <a
                                            data-linkto="https://"
                                            href="{headline_href}"
                                            style="color:{PURPLE};text-decoration:none;">
                                            {headline}
                                          </a>
                                        </p>
                                        <div class="no-hyphenation" style="mso-line-height-rule:exactly; font-family:Arial,Helvetica,sans-serif; font-size:18px; line-height:150%;">
                                          {body}
                                          <br>
                                          <a data-linkto="https://"
                                            href="{button_href}"
                                            style="color:{PURPLE};text-decoration:underline;">
                                            {cta}
                                            </a>
                                        </div>
                                      </td>
                                    </tr>
                                  </tbody>
                                </table>
                              </td>
                            </tr>
                          </tbody>
                        </table>
                      </td>
                    </tr>
                  </tbody>
                </table>
              </td>
            </tr>
          </tbody>
        </table>
      </td>
    </tr>
  </tbody>
</table>"#
        )
    }

    fn divider(&self, _ctx: &RenderContext) -> String {
        grey_rule("Divider", "40px 25px")
    }

    fn bottom(&self, _ctx: &RenderContext) -> String {
        spacer("75px Spacer", "0px 0px 75px 0px")
    }
}

pub struct TwoColumnWeb;

impl Layout for TwoColumnWeb {
    fn item(&self, item: &Item, ctx: &RenderContext) -> String {
        format!(
            r#"
<figure>
  <a href="{url}"><img src="{src}" alt="{alt}"></a>
</figure>
<article>
  <h4>
    <a href="{url}">{headline}</a>
  </h4>
  <p>{body}
  </br>
  <a href="{url}">{cta}</a></p>
</article>
"#,
            url = item.url,
            src = ctx.two_column_image(item),
            alt = attr(&item.image_alt),
            headline = item.headline,
            body = item.body,
            cta = item.cta,
        )
    }

    fn divider(&self, _ctx: &RenderContext) -> String {
        r#"<hr style="margin: 25px 0; border: .5px solid rgb(128 128 128);">"#.to_string()
    }
}
