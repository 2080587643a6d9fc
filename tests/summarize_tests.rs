use crate::summarize_extras::{FailingBackend, StubBackend};
use spectral::assert_that;
use std::fs;
use url::Url;
use websum::OutputFormat;
use websum::error::Error;
use websum::fetch::extract_document;
use websum::prompt::{Role, build_messages};
use websum::render::{markdown_to_html, output_path, save_summary};
use websum::summarize::summarize_document;

mod summarize_extras;

fn example_document() -> websum::PageDocument {
    let html = "<html><title>Example</title><body><p>Hello world.</p></body></html>";
    let url = Url::parse("https://example.com/").expect("static URL parses");
    extract_document(url, html)
}

#[test]
fn build_messages_returns_system_then_user() {
    let document = example_document();
    let messages = build_messages(&document);

    assert_that(&messages.len()).is_equal_to(2);

    let system = messages.first().expect("system message present");
    assert_that(&system.role).is_equal_to(Role::System);
    assert!(system.content.contains("Respond in markdown"));

    let user = messages.get(1).expect("user message present");
    assert_that(&user.role).is_equal_to(Role::User);
    assert!(user.content.contains("a website titled \"Example\""));
    assert!(user.content.ends_with("Hello world.\n"));
}

#[tokio::test]
async fn summarize_document_sends_one_request_with_both_messages() {
    let document = example_document();
    let stub = StubBackend::new("# Summary\nAn example page.");

    let summary = summarize_document(&document, &stub)
        .await
        .expect("stub backend succeeds");

    assert_that(&summary).is_equal_to("# Summary\nAn example page.".to_string());
    assert_that(&stub.call_count()).is_equal_to(1);

    let recorded = stub.recorded_messages();
    let messages = recorded.first().expect("one call recorded");
    assert_that(&messages.len()).is_equal_to(2);
}

#[tokio::test]
async fn backend_failure_aborts_the_run() {
    let document = example_document();

    let error = summarize_document(&document, &FailingBackend)
        .await
        .expect_err("failing backend propagates");

    assert!(matches!(error, Error::Backend { status: 500, .. }));
}

#[test]
fn output_path_is_derived_from_host() {
    let url = Url::parse("https://example.com/some/page?q=1").expect("static URL parses");
    let dir = std::path::Path::new("output");

    let markdown_path =
        output_path(dir, &url, OutputFormat::Markdown).expect("host-bearing URL resolves");
    assert_that(&markdown_path.to_string_lossy().to_string())
        .is_equal_to(format!("output{}summary_example.com.md", std::path::MAIN_SEPARATOR));

    let html_path = output_path(dir, &url, OutputFormat::Html).expect("host-bearing URL resolves");
    assert!(html_path.to_string_lossy().ends_with("summary_example.com.html"));
}

#[test]
fn hostless_url_cannot_be_saved() {
    let url = Url::parse("data:text/plain,hello").expect("static URL parses");

    let error = output_path(std::path::Path::new("output"), &url, OutputFormat::Markdown)
        .expect_err("no host must fail");

    assert!(matches!(error, Error::MissingHost(_)));
}

#[test]
fn save_summary_creates_directory_and_overwrites() {
    let tmp = tempfile::tempdir().expect("tempdir creates");
    let path = tmp.path().join("output").join("summary_example.com.md");

    save_summary(&path, "first version").expect("first write succeeds");
    save_summary(&path, "second version").expect("overwrite succeeds");

    let content = fs::read_to_string(&path).expect("summary file readable");
    assert_that(&content).is_equal_to("second version".to_string());
}

#[test]
fn markdown_renders_to_plain_html() {
    let html = markdown_to_html("# Summary\n\nA *short* overview.");

    assert!(html.contains("<h1>Summary</h1>"));
    assert!(html.contains("<em>short</em>"));
    // No auto-generated header anchors.
    assert!(!html.contains("id="));
}

#[tokio::test]
async fn pipeline_writes_the_backend_summary_verbatim() {
    let document = example_document();
    assert_that(&document.title).is_equal_to("Example".to_string());
    assert_that(&document.text).is_equal_to("Hello world.\n".to_string());

    let stub = StubBackend::new("# Summary\nAn example page.");
    let summary = summarize_document(&document, &stub)
        .await
        .expect("stub backend succeeds");

    let tmp = tempfile::tempdir().expect("tempdir creates");
    let path = output_path(tmp.path(), &document.url, OutputFormat::Markdown)
        .expect("host-bearing URL resolves");
    save_summary(&path, &summary).expect("write succeeds");

    assert!(path.ends_with("summary_example.com.md"));
    let content = fs::read_to_string(&path).expect("summary file readable");
    assert_that(&content).is_equal_to("# Summary\nAn example page.".to_string());
}
