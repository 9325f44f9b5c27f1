//! Integration tests for reading files through `Node`: whole-file reads,
//! JSON parsing, the line stream and `head`.

mod common;

use common::Fixture;
use fsnode::Error;
use tokio_stream::StreamExt;

#[tokio::test]
async fn test_read_returns_text() {
    let fixture = Fixture::new();
    let file = fixture.file("hello.txt", "héllo\nworld\n");

    assert_eq!(file.read().await.unwrap(), "héllo\nworld\n");
    assert_eq!(file.read_bytes().await.unwrap(), "héllo\nworld\n".as_bytes());
}

#[tokio::test]
async fn test_read_missing_file_is_not_found() {
    let fixture = Fixture::new();
    let err = fixture.missing("nope.txt").read().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_read_json_malformed_is_json_error() {
    let fixture = Fixture::new();
    let file = fixture.file("broken.json", "{\"a\": ");

    let err = file.read_json::<serde_json::Value>().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(err.io_kind(), None);
}

#[tokio::test]
async fn test_read_json_missing_is_io_error() {
    let fixture = Fixture::new();
    let err = fixture
        .missing("none.json")
        .read_json::<serde_json::Value>()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_lines_streams_every_line() {
    let fixture = Fixture::new();
    let file = fixture.file("list.txt", "alpha\nbeta\r\ngamma\n");

    let lines: Vec<String> = file
        .lines()
        .await
        .unwrap()
        .map(|line| line.unwrap())
        .collect()
        .await;
    assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn test_lines_allows_early_stop() {
    let fixture = Fixture::new();
    let body: String = (0..10_000).map(|i| format!("line {i}\n")).collect();
    let file = fixture.file("big.txt", body);

    let mut lines = file.lines().await.unwrap();
    let first_three: Vec<String> = (&mut lines).take(3).map(|l| l.unwrap()).collect().await;
    assert_eq!(first_three, vec!["line 0", "line 1", "line 2"]);
    assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("line 3"));
}

#[tokio::test]
async fn test_lines_missing_file_fails_on_open() {
    let fixture = Fixture::new();
    let err = fixture.missing("absent.log").lines().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_head_returns_first_line() {
    let fixture = Fixture::new();
    let file = fixture.file("two.txt", "line1\nline2");

    assert_eq!(file.head().await.unwrap().as_deref(), Some("line1"));
}

#[tokio::test]
async fn test_head_single_line_without_newline() {
    let fixture = Fixture::new();
    let file = fixture.file("one.txt", "only");

    assert_eq!(file.head().await.unwrap().as_deref(), Some("only"));
}

#[tokio::test]
async fn test_head_empty_file_is_none() {
    let fixture = Fixture::new();
    let file = fixture.file("empty.txt", "");

    assert_eq!(file.head().await.unwrap(), None);
}

#[tokio::test]
async fn test_head_leading_blank_line_is_empty_string() {
    let fixture = Fixture::new();
    let file = fixture.file("blank-first.txt", "\nsecond");

    assert_eq!(file.head().await.unwrap().as_deref(), Some(""));
}

#[tokio::test]
async fn test_head_missing_file_is_not_found() {
    let fixture = Fixture::new();
    let err = fixture.missing("nothing.txt").head().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_head_releases_file_for_deletion() {
    let fixture = Fixture::new();
    let file = fixture.file("held.txt", "first\nsecond\n");

    assert_eq!(file.head().await.unwrap().as_deref(), Some("first"));
    // With the reader closed the file can be removed, even on platforms
    // that refuse to delete open files.
    file.delete().await.unwrap();
    assert!(!file.exists().await);
}

#[cfg(unix)]
#[tokio::test]
async fn test_head_on_directory_propagates_read_error() {
    let fixture = Fixture::new();
    let dir = fixture.dir("folder");

    let err = dir.head().await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
