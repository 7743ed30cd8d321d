use std::io::Write;
use std::sync::Arc;

use textrange::{FsContentStore, InMemoryContentStore, RangeTextFetcher, TextRangeError};

fn fetcher_with(resource_id: &str, content: impl Into<Vec<u8>>) -> RangeTextFetcher {
    let mut store = InMemoryContentStore::new();
    store.insert(resource_id, content);
    RangeTextFetcher::new(Arc::new(store))
}

/// 500000 bytes as 10000 lines of 50 bytes
fn large_lined_content() -> String {
    let line = format!("{}\n", "x".repeat(49));
    line.repeat(10_000)
}

/// 1000 bytes as 100 lines of 10 bytes
fn thousand_byte_content() -> String {
    (0..100).map(|i| format!("{i:09}\n")).collect()
}

#[tokio::test]
async fn full_fetch_without_range_spec() {
    let content = large_lined_content();
    assert_eq!(content.len(), 500_000);
    let fetcher = fetcher_with("big.log", content);

    let result = fetcher.fetch("big.log", None).await.unwrap();

    assert_eq!(result.status(), 200);
    assert!(!result.is_partial());
    assert_eq!(result.content_range(), "bytes 0-499999/500000");
}

#[tokio::test]
async fn default_range_clamps_to_first_mib() {
    // Larger than the 1MiB default window: still a full (200) response but
    // the reported range covers only the first MiB.
    let line = format!("{}\n", "y".repeat(99));
    let content = line.repeat(20_000); // 2 MB
    let fetcher = fetcher_with("huge.log", content);

    let result = fetcher.fetch("huge.log", None).await.unwrap();

    assert_eq!(result.status(), 200);
    assert_eq!(result.content_range(), "bytes 0-1048575/2000000");
}

#[tokio::test]
async fn partial_fetch_reports_requested_range() {
    let content = thousand_byte_content();
    assert_eq!(content.len(), 1000);
    let fetcher = fetcher_with("doc.log", content.clone());

    let result = fetcher
        .fetch("doc.log", Some("bytes=100-199"))
        .await
        .unwrap();

    assert_eq!(result.status(), 206);
    assert!(result.is_partial());
    assert_eq!(result.content_range(), "bytes 100-199/1000");

    // Payload is line-clean: the safety margin covers the whole resource,
    // so the leading trim drops exactly the first line of the window.
    let payload = String::from_utf8(result.payload).unwrap();
    assert!(payload.starts_with("000000001\n"));
    assert!(payload.ends_with('\n'));
    for line in payload.lines() {
        assert_eq!(line.len(), 9);
    }
}

#[tokio::test]
async fn range_past_resource_end_is_unsatisfiable() {
    let fetcher = fetcher_with("doc.log", thousand_byte_content());

    let err = fetcher
        .fetch("doc.log", Some("bytes=2000-"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), 416);
    assert_eq!(
        err.content_range_unsatisfied().as_deref(),
        Some("bytes */1000")
    );
    assert!(matches!(err, TextRangeError::UnsatisfiableRange { .. }));
}

#[tokio::test]
async fn garbage_range_spec_is_malformed() {
    let fetcher = fetcher_with("doc.log", thousand_byte_content());

    let err = fetcher
        .fetch("doc.log", Some("pages=1-2"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), 416);
    assert!(matches!(err, TextRangeError::MalformedRange { .. }));
}

#[tokio::test]
async fn suffix_range_serves_resource_tail() {
    let content = thousand_byte_content();
    let fetcher = fetcher_with("doc.log", content.clone());

    let result = fetcher.fetch("doc.log", Some("bytes=-30")).await.unwrap();

    assert_eq!(result.content_range(), "bytes 970-999/1000");
    let payload = String::from_utf8(result.payload).unwrap();
    // Reaches the true resource end: no trailing trim
    assert!(payload.ends_with("000000099\n"));
}

#[tokio::test]
async fn single_long_line_defeats_trimming() {
    // No newline anywhere: both trims degrade to no-ops instead of
    // emptying the payload.
    let content = "z".repeat(10_000);
    let fetcher = fetcher_with("oneline.log", content);

    let result = fetcher
        .fetch("oneline.log", Some("bytes=5000-5100"))
        .await
        .unwrap();

    assert_eq!(result.content_range(), "bytes 5000-5100/10000");
    assert!(!result.payload.is_empty());
}

#[tokio::test]
async fn missing_resource_is_not_found() {
    let fetcher = fetcher_with("doc.log", "content\n");

    let err = fetcher.fetch("other.log", None).await.unwrap_err();
    assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn blank_identifier_is_bad_request() {
    let fetcher = fetcher_with("doc.log", "content\n");

    let err = fetcher.fetch("", None).await.unwrap_err();
    assert_eq!(err.status(), 400);
}

#[tokio::test]
async fn fetch_from_filesystem_store() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let path = dir.path().join("app.log");
    let mut file = std::fs::File::create(&path).expect("create file");
    for i in 0..200 {
        writeln!(file, "request {i} handled").expect("write line");
    }
    drop(file);

    let store = Arc::new(FsContentStore::new(dir.path()));
    let fetcher = RangeTextFetcher::new(store);

    let result = fetcher.fetch("app.log", Some("bytes=0-99")).await.unwrap();
    assert_eq!(result.status(), 206);

    let payload = String::from_utf8(result.payload).unwrap();
    assert!(payload.starts_with("request 0 handled\n"));
    assert!(payload.ends_with('\n'));
}

#[tokio::test]
async fn fetch_result_is_stable_across_repeats() {
    // Same spec against the same resource: identical results
    let fetcher = fetcher_with("doc.log", thousand_byte_content());

    let first = fetcher
        .fetch("doc.log", Some("bytes=250-400"))
        .await
        .unwrap();
    let second = fetcher
        .fetch("doc.log", Some("bytes=250-400"))
        .await
        .unwrap();

    assert_eq!(first, second);
}
