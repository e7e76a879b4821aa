//! Generator Integration Tests
//!
//! Directory scanning, stream config parsing and the written metadata files.

use mediashelf::config::{ProbeSettings, ResolvedConfig};
use mediashelf::domain::{CatalogEntry, StreamEntry};
use mediashelf::library::{generate_document_catalog, generate_stream_catalog, run_generator, GenerateError};
use tempfile::TempDir;
use tokio::fs;

async fn touch(dir: &std::path::Path, names: &[&str]) {
    fs::create_dir_all(dir).await.unwrap();
    for name in names {
        fs::write(dir.join(name), b"%PDF-1.4").await.unwrap();
    }
}

#[tokio::test]
async fn test_documents_sorted_numerically() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), &["pdf10.pdf", "pdf03.pdf", "pdf01.pdf", "notes.txt"]).await;

    let generated = generate_document_catalog(temp.path(), &ProbeSettings::default())
        .await
        .unwrap();

    assert!(!generated.fallback);
    let names: Vec<_> = generated.entries.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(names, vec!["pdf01.pdf", "pdf03.pdf", "pdf10.pdf"]);
    let ids: Vec<_> = generated.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_titles_keep_filename_numbers() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), &["pdf07.pdf", "PDF03.PDF"]).await;

    let generated = generate_document_catalog(temp.path(), &ProbeSettings::default())
        .await
        .unwrap();

    assert_eq!(generated.entries[0].id, 1);
    assert_eq!(generated.entries[0].title, "PDF 文件 03");
    assert_eq!(generated.entries[0].path, "assets/pdfs/PDF03.PDF");
    assert_eq!(generated.entries[1].id, 2);
    assert_eq!(generated.entries[1].title, "PDF 文件 07");
}

#[tokio::test]
async fn test_subdirectories_are_ignored() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), &["pdf02.pdf"]).await;
    fs::create_dir_all(temp.path().join("pdf01.pdf")).await.unwrap();

    let generated = generate_document_catalog(temp.path(), &ProbeSettings::default())
        .await
        .unwrap();

    assert_eq!(generated.entries.len(), 1);
    assert_eq!(generated.entries[0].filename, "pdf02.pdf");
}

#[tokio::test]
async fn test_unreadable_directory_uses_default_list() {
    let temp = TempDir::new().unwrap();

    let generated = generate_document_catalog(&temp.path().join("missing"), &ProbeSettings::default())
        .await
        .unwrap();

    assert!(generated.fallback);
    assert_eq!(generated.entries.len(), 11);
    for (i, entry) in generated.entries.iter().enumerate() {
        assert_eq!(entry.id as usize, i + 1);
        assert_eq!(entry.filename, format!("pdf{:02}.pdf", i + 1));
    }
}

#[tokio::test]
async fn test_empty_directory_yields_empty_list() {
    let temp = TempDir::new().unwrap();

    let generated = generate_document_catalog(temp.path(), &ProbeSettings::default())
        .await
        .unwrap();

    assert!(!generated.fallback);
    assert!(generated.entries.is_empty());
}

#[tokio::test]
async fn test_stream_config_parsing() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("youtube-videos.txt");
    fs::write(&config, "abc123,My Title,\n,Title,Desc\n\nxyz789\n")
        .await
        .unwrap();

    let generated = generate_stream_catalog(&config).await;

    assert!(!generated.fallback);
    assert_eq!(generated.entries.len(), 2);
    assert_eq!(generated.entries[0].title, "My Title");
    assert_eq!(generated.entries[0].description, "第 01 個 YouTube 音訊");
    assert_eq!(generated.entries[1].id, "xyz789");
    assert_eq!(generated.entries[1].title, "YouTube 音訊 03");
}

#[tokio::test]
async fn test_missing_stream_config_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let generated = generate_stream_catalog(&temp.path().join("none.txt")).await;

    assert!(generated.fallback);
    assert_eq!(generated.entries.len(), 5);
    assert_eq!(generated.entries[0].id, "dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_run_generator_writes_both_files() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("assets/pdfs"), &["pdf02.pdf", "pdf01.pdf"]).await;
    fs::create_dir_all(temp.path().join("config")).await.unwrap();
    fs::write(temp.path().join("config/youtube-videos.txt"), "vid1,One,First\n")
        .await
        .unwrap();

    let config = ResolvedConfig::with_root(temp.path());
    let report = run_generator(&config).await.unwrap();

    assert_eq!(report.documents, 2);
    assert!(!report.documents_fallback);
    assert_eq!(report.streams, 1);

    let docs: Vec<CatalogEntry> =
        serde_json::from_slice(&fs::read(temp.path().join("data/pdfs.json")).await.unwrap()).unwrap();
    assert_eq!(docs[0].filename, "pdf01.pdf");
    assert_eq!(docs[1].path, "assets/pdfs/pdf02.pdf");

    let raw = fs::read_to_string(temp.path().join("data/youtube.json")).await.unwrap();
    let streams: Vec<StreamEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(streams[0].id, "vid1");
    assert!(raw.contains("\"kind\": \"stream\""));
}

#[tokio::test]
async fn test_run_generator_write_failure_is_fatal() {
    let temp = TempDir::new().unwrap();
    // A file where the data directory should be
    fs::write(temp.path().join("data"), b"blocker").await.unwrap();

    let config = ResolvedConfig::with_root(temp.path());
    let err = run_generator(&config).await.unwrap_err();

    assert!(matches!(err, GenerateError::WriteFailure { .. }));
}
