use super::*;
use chrono::TimeZone;
use tempfile::TempDir;

#[test]
fn test_auto_dir_name_shape() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let name = auto_dir_name(at);

    assert!(name.starts_with(AUTO_DIR_PREFIX));
    let suffix = &name[AUTO_DIR_PREFIX.len()..];
    assert_eq!(suffix.len(), 16);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_auto_dir_name_is_deterministic() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    assert_eq!(auto_dir_name(at), auto_dir_name(at));
}

#[test]
fn test_auto_dir_name_changes_with_time() {
    let a = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let b = a + chrono::Duration::nanoseconds(1);
    assert_ne!(auto_dir_name(a), auto_dir_name(b));
}

#[test]
fn test_resolve_explicit_dir_creates_parents() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("x").join("y");

    let dir = resolve_output_dir(target.to_str().unwrap()).unwrap();

    assert_eq!(dir, target);
    assert!(target.is_dir());
}

#[test]
fn test_resolve_existing_dir_is_ok() {
    let tmp = TempDir::new().unwrap();
    let dir = resolve_output_dir(tmp.path().to_str().unwrap()).unwrap();
    assert_eq!(dir, tmp.path());
}

#[test]
fn test_resolve_empty_generates_name() {
    let dir = resolve_output_dir("").unwrap();
    let name = dir.to_str().unwrap().to_string();

    assert!(name.starts_with(AUTO_DIR_PREFIX));
    assert!(dir.is_dir());
    std::fs::remove_dir(&dir).unwrap();
}
