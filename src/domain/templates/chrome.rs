//! Document chrome: the email header and footer around the sections, and
//! the page shell used to preview the web fragment.
//!
//! The email header leaves the layout tables open; section markup is
//! emitted inside them and [`EMAIL_FOOTER`] closes them again.

/// Marker in [`EMAIL_HEADER`] replaced with the formatted publication date
pub const DATE_PLACEHOLDER: &str = "%%date%%";

pub const EMAIL_HEADER: &str = r##"
<!DOCTYPE html>
<html lang="en">

<head>
  <title>Purple Line</title>
  <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <style type="text/css">
    ReadMsgBody { width: 100%; }
    .ExternalClass { width: 100%; }
    .ExternalClass,
    .ExternalClass p,
    .ExternalClass span,
    .ExternalClass font,
    .ExternalClass td,
    .ExternalClass div { line-height: 100%; }
    body { -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; margin: 0 !important; }
    p { margin: 1em 0; }
    table td { border-collapse: collapse; }
    img { outline: 0; }
    a img { border: none; }
    @-ms-viewport { width: device-width; }
  </style>
  <style type="text/css">
    @media only screen and (max-width: 480px) {
      .container { width: 100% !important; }
      .footer { width: auto !important; margin-left: 0; }
      .mobile-hidden { display: none !important; }
      .logo { display: block !important; padding: 0 !important; }
      img { max-width: 100% !important; height: auto !important; max-height: auto !important; }
      .header img { max-width: 100% !important; height: auto !important; max-height: auto !important; }
      .photo img { width: 100% !important; max-width: 100% !important; height: auto !important; }
      .drop { display: block !important; width: 100% !important; float: left; clear: both; }
      .footerlogo { display: block !important; width: 100% !important; padding-top: 15px; float: left; clear: both; }
      .nav4, .nav5, .nav6 { display: none !important; }
      .tableBlock { width: 100% !important; }
      .responsive-td { width: 100% !important; display: block !important; padding: 0 !important; }
      .fluid, .fluid-centered { width: 100% !important; max-width: 100% !important; height: auto !important; margin-left: auto !important; margin-right: auto !important; }
      .fluid-centered { margin-left: auto !important; margin-right: auto !important; }
      body { padding: 0px !important; font-size: 16px !important; line-height: 150% !important; }
      h1 { font-size: 22px !important; line-height: normal !important; }
      h2 { font-size: 20px !important; line-height: normal !important; }
      h3 { font-size: 18px !important; line-height: normal !important; }
      .buttonstyles { font-family: arial, helvetica, sans-serif !important; font-size: 16px !important; color: #FFFFFF !important; padding: 10px !important; }
    }

    @media only screen and (max-width: 600px) {
      .container { width: 100% !important; }
      .mobile-hidden { display: none !important; }
      .logo { display: block !important; padding: 0 !important; }
      .photo img { width: 100% !important; height: auto !important; }
      .nav5, .nav6 { display: none !important; }
      .fluid, .fluid-centered { width: 100% !important; max-width: 100% !important; height: auto !important; margin-left: auto !important; margin-right: auto !important; }
      .fluid-centered { margin-left: auto !important; margin-right: auto !important; }
    }
  </style>
  <!--[if mso]><style type="text/css">body, table, td { font-family: Arial, Helvetica, sans-serif; font-size:16px; color:#000000; line-height:1; }</style><![endif]-->
</head>

<body bgcolor="#ffffff" text="#000000"
  style="background-color: #ffffff; color: #000000; padding: 0px; -webkit-text-size-adjust:none; font-size: 16px; font-family:arial,helvetica,sans-serif;">
  <table width="100%" border="0" cellpadding="0" cellspacing="0" align="center" role="presentation">
    <tbody>
      <tr>
        <td align="center">
          <table cellspacing="0" cellpadding="0" border="0" width="600" class="container" align="center" role="presentation">
            <tbody>
              <tr>
                <td>
                  <table class="tb_properties border_style" style="background-color:#FFFFFF;" cellspacing="0"
                    cellpadding="0" bgcolor="#ffffff" width="100%" role="presentation">
                    <tbody>
                      <tr>
                        <td align="center" valign="top">
                          <table align="left" border="0" cellpadding="0" cellspacing="0" width="100%" role="presentation">
                            <tbody>
                              <tr>
                                <td class="content_padding">
                                  <table border="0" cellpadding="0" cellspacing="0" width="100%" role="presentation">
                                    <tbody>
                                      <tr>
                                        <!-- top slot -->
                                        <td align="center" class="header" valign="top">
                                          <table cellpadding="0" cellspacing="0" width="100%" role="presentation" style="min-width: 100%; " class="stylingblock-content-wrapper">
                                            <tbody>
                                              <tr>
                                                <td class="stylingblock-content-wrapper camarker-inner" style="padding: 50px 0px 0px 25px;">
                                                  <table width="100%" cellspacing="0" cellpadding="0" role="presentation">
                                                    <tbody>
                                                      <tr>
                                                        <td align="center"><img
                                                            src="https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1/5bf6a3a5-b3c9-4ee5-8ea2-635356a8d78a.png"
                                                            alt="Purple Line Hero" height="196"
                                                            width="575"
                                                            style="display: block; padding: 0; text-align: center; height: 196px; width: 575px; border: 0px;">
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
                                      <tr>
                                        <!-- main slot -->
                                        <td align="center" class="header" valign="top">
                                          <table align="left" border="0" cellpadding="0" cellspacing="0" width="100%" role="presentation">
                                            <tbody>
                                              <tr>
                                                <td class="responsive-td" valign="top" style="width: 100%;">
                                                  <table cellpadding="0" cellspacing="0" width="100%"
                                                    role="presentation" class="stylingblock-content-wrapper"
                                                    style="min-width: 100%; ">
                                                    <tbody>
                                                      <tr>
                                                        <td class="stylingblock-content-margin-cell" style="padding: 25px 0px 45px 25px; ">
                                                          <p style="line-height: 22px; margin: 0;">
                                                            <span style="color:#4e2a84; font-size:15px; font-family:Arial,Helvetica,sans-serif;">
                                                              <b>News for Our Northwestern Alumni Community</b>
                                                            </span>
                                                            <br>
                                                            <span style="color:#4e2a84; font-size:15px; font-family:Arial,Helvetica,sans-serif;">
                                                              %%date%%
                                                            </span>
                                                          </p>
                                                        </td>
                                                      </tr>
                                                    </tbody>
                                                  </table>"##;

pub const EMAIL_FOOTER: &str = r##"
                                                  <table cellpadding="0" cellspacing="0" width="100%"
                                                    role="presentation" style="min-width: 100%;"
                                                    class="stylingblock-content-wrapper">
                                                    <tbody>
                                                      <tr>
                                                        <td class="stylingblock-content-wrapper camarker-inner">
                                                          <table style="background-color:#4e2a84; width:100%;" width="100%" role="presentation">
                                                            <tbody>
                                                              <tr>
                                                                <td align="center" style="width:275px; padding:50px 0px;" width="275">
                                                                  <a data-linkto="https://" href="https://click.alums.northwestern.edu/?qs=755b59f625e560c8342ebddd5084426521f25c3bfec59566c34b56bdb06b66b8c51fd97c7735575be51a10d74d5a198b8105069153382fa0">
                                                                    <img alt="Northwestern logo"
                                                                      src="https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1/43ff4acc-da82-4721-a8bb-42093362fbd9.png"
                                                                      style="width:275px;" width="275">
                                                                  </a></td>
                                                              </tr>
                                                            </tbody>
                                                          </table>
                                                        </td>
                                                      </tr>
                                                    </tbody>
                                                  </table>
                                                  <table cellpadding="0" cellspacing="0" width="100%"
                                                    role="presentation"
                                                    style="background-color: #401F68; min-width: 100%; "
                                                    class="stylingblock-content-wrapper">
                                                    <tbody>
                                                      <tr>
                                                        <td style="padding:15px 0px;" class="stylingblock-content-wrapper camarker-inner">
                                                          <table role="presentation" align="center">
                                                            <tbody>
                                                              <tr>
                                                                <td align="center"><a
                                                                    style="font-weight:normal;color:#4E2A84;text-decoration:underline;line-height:100%;"
                                                                    href="https://click.alums.northwestern.edu/?qs=755b59f625e560c84555d68c66a815c14bdacec1a5b53e15801e2007b5840c0c178940d1e749759855bcc187be85a3952de5f2ab0337608c"><img
                                                                      src="https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1/db0c983b-d2ef-4012-89d1-93f113fd6ef1.png"
                                                                      alt="Facebook social icon"
                                                                      style="height:30px;" data-assetid="62968">
                                                                  </a></td>
                                                                <td><a
                                                                    style="font-weight:normal;color:#4E2A84;text-decoration:underline;line-height:100%;"
                                                                    href="https://click.alums.northwestern.edu/?qs=755b59f625e560c820e2804ce255fadf66e97a487aedd22a8d77ed018b9360a601bf46de8d7077f1c3b63f00005836f0ac04c52d5767b31b"><img
                                                                      src="https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1/0aa151e1-2f81-4a70-87c7-24b0a41792e2.png"
                                                                      alt="Instagram social icon"
                                                                      style="height:30px;" data-assetid="62966">
                                                                  </a></td>
                                                                <td><a
                                                                    style="font-weight:normal;color:#4E2A84;text-decoration:underline;line-height:100%;"
                                                                    href="https://click.alums.northwestern.edu/?qs=755b59f625e560c8a96a4cfe2d4166afa891015c9f24b5a183044c318015c502d852dc985fa1d100794fc2f6ec1fb09dd84c3206b3057b13"><img
                                                                      src="https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1/af4fb0f0-2640-4363-8aab-de2f3aba9d81.png"
                                                                      alt="X social icon" style="height:30px;"
                                                                      data-assetid="62969">
                                                                  </a></td>
                                                                <td><a
                                                                    style="font-weight:normal;color:#4E2A84;text-decoration:underline;line-height:100%;"
                                                                    href="https://click.alums.northwestern.edu/?qs=755b59f625e560c8ed2ed9f60dfbdc256224bad3dde1efe6fdcb28771413580763f972b27d9f34a9962afd0bc6d610405c60306052ac7980"><img
                                                                      src="https://image.alums.northwestern.edu/lib/fe3111747364047e7d1474/m/1/9888ce1f-cd5b-4de8-9c10-59f2b09000a8.png"
                                                                      alt="Linkedin social icon"
                                                                      style="height:30px;" data-assetid="62967">
                                                                  </a></td>
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
      <tr>
        <td valign="top"></td>
      </tr>
    </tbody>
  </table>
</body>
</html>"##;

const WEB_PREVIEW_TOP: &str = r#"
<head>
  <link href="https://alumni.northwestern.edu/_files/css/vendor.css" media="screen" rel="stylesheet">
  <link href="https://alumni.northwestern.edu/_files/css/style.css" id="MainStyle" rel="stylesheet">
  <link href="https://alumni.northwestern.edu/_files/css/overwrite-2017.css" rel="stylesheet">
  <link href="https://alumni.northwestern.edu/_files/css/hh-module.css" rel="stylesheet">
  <link href="https://alumni.northwestern.edu/_files/css/hh-custom.css" rel="stylesheet">
  <link href="https://assets.ard.northwestern.edu/css/purpleline.css" rel="stylesheet">
</head>
<body>
  <div class="section hh-news hh-module">
    <div class="container">
      <div class="row">
        <div class="col-md-12">
          <div class="section-row wysiwyg">
            <div style="width: 600px; margin: 0 auto;">"#;

const WEB_PREVIEW_BOTTOM: &str = r#"
            </div>
          </div>
        </div>
      </div>
    </div>
  </div>
</body>"#;

/// Email header with the publication date filled in
pub fn email_header(publication_date: &str) -> String {
    EMAIL_HEADER.replacen(DATE_PLACEHOLDER, publication_date, 1)
}

/// Wrap a web fragment in the alumni site's stylesheets for previewing
pub fn web_preview(fragment: &str) -> String {
    format!("{WEB_PREVIEW_TOP}{fragment}{WEB_PREVIEW_BOTTOM}")
}
