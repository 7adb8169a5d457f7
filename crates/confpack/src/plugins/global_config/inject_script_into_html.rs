use std::cell::Cell;

use confpack_error::BuildResult;
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};

/// Rewrites the html document so a `<script src="{script_src}">` tag is the
/// first child of `<body>`. The rewriter streams the markup rather than
/// building a tree, so it never synthesizes the implicit `<body>` a
/// tree-building parser would wrap the tag in; documents without one get the
/// tag appended at document end, where browsers re-parent it into the body
/// at load time.
pub fn inject_script_into_html(html: &str, script_src: &str) -> BuildResult<String> {
  let script_tag = format!(r#"<script src="{script_src}"></script>"#);
  let body_seen = Cell::new(false);

  let mut output = rewrite_str(
    html,
    RewriteStrSettings {
      element_content_handlers: vec![element!("body", |body| {
        body.prepend(&script_tag, ContentType::Html);
        body_seen.set(true);
        Ok(())
      })],
      ..RewriteStrSettings::default()
    },
  )
  .map_err(anyhow::Error::from)?;

  if !body_seen.get() {
    output.push_str(&script_tag);
  }

  Ok(output)
}

#[test]
fn prepends_the_tag_as_the_first_child_of_body() {
  let html = inject_script_into_html("<html><body><main></main></body></html>", "globalConfig.js")
    .unwrap();
  assert_eq!(
    html,
    r#"<html><body><script src="globalConfig.js"></script><main></main></body></html>"#
  );
}

#[test]
fn keeps_body_attributes_intact() {
  let html = inject_script_into_html(r#"<body class="app"></body>"#, "globalConfig.js").unwrap();
  assert_eq!(html, r#"<body class="app"><script src="globalConfig.js"></script></body>"#);
}

#[test]
fn documents_without_a_body_get_the_tag_appended() {
  let html = inject_script_into_html("<html><head></head></html>", "globalConfig.js").unwrap();
  assert_eq!(html, r#"<html><head></head></html><script src="globalConfig.js"></script>"#);
}
