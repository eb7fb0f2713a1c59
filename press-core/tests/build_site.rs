use std::fs;

use pretty_assertions::assert_eq;
use press_core::{BuildError, ConvertError, SiteBuilder};

const TEMPLATE: &str =
    "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

#[test]
fn builds_a_site_from_markdown_and_a_template() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content/blog")).unwrap();
    fs::create_dir_all(root.join("static/css")).unwrap();
    fs::write(root.join("template.html"), TEMPLATE).unwrap();
    fs::write(root.join("content/index.md"), "# Home\n\nSome **bold** text.\n").unwrap();
    fs::write(
        root.join("content/blog/post.md"),
        "# First Post\n\n- one\n- two\n",
    )
    .unwrap();
    fs::write(root.join("static/css/site.css"), "body { margin: 0; }").unwrap();

    let summary = SiteBuilder::new()
        .content_dir(root.join("content"))
        .assets_dir(root.join("static"))
        .template_path(root.join("template.html"))
        .output_dir(root.join("public"))
        .build()
        .unwrap();

    assert_eq!(summary.pages, 2);
    assert_eq!(summary.assets, 1);

    let index = fs::read_to_string(root.join("public/index.html")).unwrap();
    assert_eq!(
        index,
        "<html><head><title>Home</title></head><body><div><h1>Home</h1><p>Some <b>bold</b> text.</p></div></body></html>",
    );

    let post = fs::read_to_string(root.join("public/blog/post.html")).unwrap();
    assert!(post.contains("<title>First Post</title>"));
    assert!(post.contains("<ul><li>one</li><li>two</li></ul>"));

    assert_eq!(
        fs::read_to_string(root.join("public/css/site.css")).unwrap(),
        "body { margin: 0; }",
    );
}

#[test]
fn stale_output_is_cleared_before_building() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content")).unwrap();
    fs::create_dir_all(root.join("public")).unwrap();
    fs::write(root.join("template.html"), TEMPLATE).unwrap();
    fs::write(root.join("content/index.md"), "# Home\n").unwrap();
    fs::write(root.join("public/stale.html"), "left over").unwrap();

    SiteBuilder::new()
        .content_dir(root.join("content"))
        .assets_dir(root.join("static"))
        .template_path(root.join("template.html"))
        .output_dir(root.join("public"))
        .build()
        .unwrap();

    assert!(!root.join("public/stale.html").exists());
    assert!(root.join("public/index.html").is_file());
}

#[test]
fn page_without_a_title_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content")).unwrap();
    fs::write(root.join("template.html"), TEMPLATE).unwrap();
    fs::write(root.join("content/untitled.md"), "no heading here\n").unwrap();

    let err = SiteBuilder::new()
        .content_dir(root.join("content"))
        .assets_dir(root.join("static"))
        .template_path(root.join("template.html"))
        .output_dir(root.join("public"))
        .build()
        .unwrap_err();

    match err {
        BuildError::Convert(source, ConvertError::MissingTitle) => {
            assert_eq!(source, root.join("content/untitled.md"));
        }
        other => panic!("expected a missing-title error, got: {}", other),
    }
}

#[test]
fn missing_content_dir_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("template.html"), TEMPLATE).unwrap();

    let err = SiteBuilder::new()
        .content_dir(root.join("content"))
        .template_path(root.join("template.html"))
        .output_dir(root.join("public"))
        .build()
        .unwrap_err();

    assert!(matches!(err, BuildError::MissingContentDir(_)));
}
