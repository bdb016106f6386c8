mod common;

use common::{stat, Fixture};
use facetview::export::{checksum, expired, Export, ExportStatus};
use facetview::presenter::{self, LoadedView, StatisticsProps};
use facetview::StatisticField;
use std::fs;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn loaded_countries(fx: &Fixture) -> LoadedView {
    let values = stat(&[("us", 10), ("de", 2), ("fr", 1)]);
    let field = StatisticField::Countries;
    let props = StatisticsProps {
        collection: "12",
        field: &field,
        total: Some(13),
        values: Some(&values),
    };
    presenter::present(props, &fx.caps(), 1)
        .loaded()
        .cloned()
        .expect("loaded view")
}

#[test]
fn test_write_csv_includes_hidden_rows() {
    let fx = Fixture::new();
    let view = loaded_countries(&fx);
    let dir = TempDir::new().unwrap();

    let mut export = Export::create("12 countries", "export_statistics", Some("12".into()), None).unwrap();
    let path = export.write_csv(&view, dir.path()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "label,value,count,link");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("United States,us,10,"));

    assert_eq!(export.file_name.as_deref(), Some("12_countries.csv"));
    assert_eq!(export.file_size, Some(content.len() as u64));
    assert_eq!(export.content_hash.as_deref().map(str::len), Some(64));
    assert_eq!(export.status, ExportStatus::Pending);
}

#[test]
fn test_identical_content_hashes_identically() {
    let fx = Fixture::new();
    let view = loaded_countries(&fx);
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    let mut a = Export::create("a", "export_statistics", None, None).unwrap();
    let mut b = Export::create("b", "export_statistics", None, None).unwrap();
    let path_a = a.write_csv(&view, dir_a.path()).unwrap();
    b.write_csv(&view, dir_b.path()).unwrap();

    assert_eq!(a.content_hash, b.content_hash);
    assert_eq!(a.content_hash.clone().unwrap(), checksum(&path_a).unwrap());
}

#[test]
fn test_publish_moves_file_under_content_hash() {
    let fx = Fixture::new();
    let view = loaded_countries(&fx);
    let work = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();

    let mut export = Export::create("countries", "export_statistics", None, None).unwrap();
    let written = export.write_csv(&view, work.path()).unwrap();
    let published = export.publish(archive.path()).unwrap();

    let hash = export.content_hash.clone().unwrap();
    assert_eq!(published, archive.path().join(&hash));
    assert!(published.exists());
    assert!(!written.exists());
    assert_eq!(export.status, ExportStatus::Successful);
    assert_eq!(export.to_record().export_status, ExportStatus::Successful);
}

#[test]
fn test_publish_without_file_fails() {
    let archive = TempDir::new().unwrap();
    let mut export = Export::create("empty", "export_statistics", None, None).unwrap();
    assert!(export.publish(archive.path()).is_err());
    assert_eq!(export.status, ExportStatus::Pending);
}

#[test]
fn test_shared_publication_survives_deletion() {
    let fx = Fixture::new();
    let view = loaded_countries(&fx);
    let work_a = TempDir::new().unwrap();
    let work_b = TempDir::new().unwrap();
    let archive = TempDir::new().unwrap();

    let mut a = Export::create("a", "export_statistics", None, None).unwrap();
    let mut b = Export::create("b", "export_statistics", None, None).unwrap();
    a.write_csv(&view, work_a.path()).unwrap();
    b.write_csv(&view, work_b.path()).unwrap();
    a.publish(archive.path()).unwrap();
    let published = b.publish(archive.path()).unwrap();

    a.delete_publication(archive.path(), std::slice::from_ref(&b))
        .unwrap();
    assert!(a.deleted);
    assert!(published.exists());

    b.delete_publication(archive.path(), std::slice::from_ref(&a))
        .unwrap();
    assert!(b.deleted);
    assert!(!published.exists());
}

#[test]
fn test_expired_skips_deleted_exports() {
    let now = SystemTime::now();
    let short = Export::create("short", "export_statistics", None, Some(Duration::from_secs(0))).unwrap();
    let mut gone = Export::create("gone", "export_statistics", None, Some(Duration::from_secs(0))).unwrap();
    gone.deleted = true;
    let long = Export::create("long", "export_statistics", None, None).unwrap();

    let exports = vec![short, gone, long];
    let labels: Vec<&str> = expired(&exports, now + Duration::from_secs(1))
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(labels, vec!["short"]);
}
