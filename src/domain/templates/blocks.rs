//! Email building blocks shared by several section layouts

use crate::domain::context::attr;
use crate::domain::{Item, RenderContext};

pub(crate) const PURPLE: &str = "#4e2a84";

/// Standard content block: a margin cell wrapping a transparent inner cell.
pub(crate) fn content_block(label: &str, padding: &str, inner: &str) -> String {
    format!(
        r#"
<!-- BLOCK: {label} -->
<table cellpadding="0" cellspacing="0" width="100%"
  role="presentation" class="stylingblock-content-wrapper"
  style="min-width: 100%; ">
  <tbody>
    <tr>
      <td class="stylingblock-content-margin-cell" style="padding: {padding};">
        <table cellpadding="0" cellspacing="0" width="100%"
          role="presentation"
          style="background-color: transparent; min-width: 100%; "
          class="stylingblock-content-wrapper">
          <tbody>
            <tr>
              <td style="padding: 0px;" class="stylingblock-content-wrapper camarker-inner">
{inner}
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

/// Block with only vertical padding, used to space sections apart.
pub(crate) fn spacer(label: &str, padding: &str) -> String {
    format!(
        r#"
<!-- BLOCK: {label} -->
<table cellpadding="0" cellspacing="0" width="100%" role="presentation" class="stylingblock-content-wrapper" style="min-width: 100%; ">
  <tbody>
    <tr>
      <td class="stylingblock-content-margin-cell" style="padding: {padding}; ">
      </td>
    </tr>
  </tbody>
</table>"#
    )
}

/// Thin grey horizontal rule
pub(crate) fn grey_rule(label: &str, padding: &str) -> String {
    content_block(
        label,
        padding,
        r#"                <table width="100%" cellpadding="0" cellspacing="0" border="0" style="margin: 0;">
                  <tbody>
                    <tr>
                      <td style="border-top: 1px solid #808080; width: 100%; background-color: #808080; font-size: 0; line-height: 0; mso-line-height-rule: exactly;">&nbsp;</td>
                    </tr>
                  </tbody>
                </table>"#,
    )
}

/// Upper-case purple section heading followed by a thick purple rule.
///
/// With no `rule_padding` the rule sits in a bare wrapper table with no margin cell.
pub(crate) fn section_heading(label: &str, title: &str, rule_padding: Option<&str>) -> String {
    let heading = content_block(
        &format!("{label} section head"),
        "0px 0px 20px 25px",
        &format!(
            r#"                <div style="mso-line-height-rule:exactly; line-height: 1; margin-bottom:0px; padding-bottom:0px; font-size:36px; color:{PURPLE}; font-family:Arial,Helvetica,sans-serif;">
                  {title}</div>"#
        ),
    );
    let bar = format!(
        r#"                <table width="100%" cellpadding="0" cellspacing="0" border="0" style="margin: 0;">
                  <tbody>
                    <tr>
                      <td style="height: 6px; background-color: {PURPLE}; font-size: 0; line-height: 0;">&nbsp;</td>
                    </tr>
                  </tbody>
                </table>"#
    );
    let rule = match rule_padding {
        Some(padding) => content_block(&format!("{label} rule"), padding, &bar),
        None => format!(
            r#"
<table cellpadding="0" cellspacing="0" width="100%"
  role="presentation"
  style="background-color: transparent; min-width: 100%; "
  class="stylingblock-content-wrapper">
  <tbody>
    <tr>
      <td style="padding: 0px;" class="stylingblock-content-wrapper camarker-inner">
{bar}
      </td>
    </tr>
  </tbody>
</table>"#
        ),
    };
    heading + &rule
}

/// Full-width linked photo
pub(crate) fn photo(
    label: &str,
    padding: &str,
    href: &str,
    src: &str,
    alt: &str,
    (width, height): (u32, u32),
) -> String {
    let alt = attr(alt);
    content_block(
        label,
        padding,
        &format!(
            r#"                <table width="100%" cellspacing="0" cellpadding="0" role="presentation">
                  <tbody>
                    <tr>
                      <td align="center"><a
                          href="{href}"
                          data-linkto="https://"><img
                            src="{src}"
                            alt="{alt}"
                            height="{height}"
                            width="{width}"
                            style="display: block; padding: 0px; text-align: center; height: {height}px; width: {width}px; border: 0px;"></a>
                      </td>
                    </tr>
                  </tbody>
                </table>"#
        ),
    )
}

/// Story headline, story paragraph and call-to-action button
pub(crate) fn story(label: &str, item: &Item, ctx: &RenderContext) -> String {
    let headline_href = ctx.item_link(item, "headline");
    let button_href = ctx.item_link(item, "button");
    let headline = ctx.clean(&item.headline);
    let body = ctx.clean(&item.body);
    let cta = ctx.clean(&item.cta);

    let headline_block = content_block(
        &format!("{label} headline"),
        "0px 25px 0px 25px",
        &format!(
            r#"                <p class="no-hyphenation" style="mso-line-height-rule:exactly; line-height: 36px; margin: 0 0 10px 0;">
                  <span style="color:{PURPLE};">
                    <span style="font-size:30px;">
                      <span style="font-family:Arial,Helvetica,sans-serif;">
                        <b><a
                            data-linkto="https://"
                            href="{headline_href}"
                            style="color:{PURPLE};text-decoration:none;">
                            {headline}
                        </a></b>
                      </span>
                    </span>
                  </span>
                </p>"#
        ),
    );

    let body_block = content_block(
        &format!("{label} graf"),
        "0px 25px 27px 25px",
        &format!(
            r#"                <div class="no-hyphenation" style="mso-line-height-rule:exactly; line-height: 150%; font-size: 18px; font-family: Arial, Helvetica, sans-serif;">
                  {body}
                </div>"#
        ),
    );

    let button_block = content_block(
        &format!("{label} CTA button"),
        "0px 0px 50px 25px",
        &format!(
            r#"                <table width="100%" border="0" cellspacing="0" cellpadding="0" role="presentation" style="width:100%;">
                  <tbody>
                    <tr>
                      <td align="left">
                        <table border="0" cellspacing="0" cellpadding="0" role="presentation">
                          <tbody>
                            <tr>
                              <td class="innertd buttonblock" bgcolor="{PURPLE}" style="border-radius: 0px; -moz-border-radius: 0px; -webkit-border-radius: 3px; color: #FFFFFF; background-color: {PURPLE};">
                                <a target="_blank"
                                  class="buttonstyles"
                                  style="width: 200px; font-size: 16px; font-family: Arial, helvetica, sans-serif; color: #FFFFFF; text-align: center; text-decoration: none; display: block; line-height: 100%; background-color: {PURPLE}; border: 1px solid {PURPLE}; padding: 10px; border-radius: 0px; -moz-border-radius: 3px; -webkit-border-radius: 0px;"
                                  href="{button_href}"
                                  data-linkto="https://"><b>
                                  {cta}</b></a>
                              </td>
                            </tr>
                          </tbody>
                        </table>
                      </td>
                    </tr>
                  </tbody>
                </table>"#
        ),
    );

    format!("{headline_block}\n{body_block}\n{button_block}")
}

/// Article markup shared by the web news and action layouts
pub(crate) fn web_article(item: &Item) -> String {
    format!(
        r#"
<article>
  <h3>
    <a href="{url}">{headline}</a>
  </h3>
  <p>{body}</p>
  <p><a href="{url}" class="button">{cta}</a></p>
</article>
"#,
        url = item.url,
        headline = item.headline,
        body = item.body,
        cta = item.cta,
    )
}
