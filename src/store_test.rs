use super::*;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> PositionStore {
    PositionStore::new(dir.path().join("overscan").join("positions.json"))
}

#[test]
fn missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(store.load().unwrap().is_empty());
    assert_eq!(store.get("1080p60hz").unwrap(), None);
}

#[test]
fn set_then_get() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("1080p60hz", Position::new(47, 26, 1826, 1028)).unwrap();
    assert_eq!(store.get("1080p60hz").unwrap(), Some(Position::new(47, 26, 1826, 1028)));
}

#[test]
fn modes_are_stored_independently() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("1080p60hz", Position::new(1, 2, 3, 4)).unwrap();
    store.set("720p60hz", Position::new(5, 6, 7, 8)).unwrap();
    store.set("1080p60hz", Position::new(9, 9, 9, 9)).unwrap();

    let map = store.load().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["720p60hz"], Position::new(5, 6, 7, 8));
    assert_eq!(map["1080p60hz"], Position::new(9, 9, 9, 9));
}

#[test]
fn survives_a_new_instance() {
    let dir = TempDir::new().unwrap();
    store_in(&dir).set("576cvbs", Position::new(10, 10, 700, 556)).unwrap();
    assert_eq!(store_in(&dir).get("576cvbs").unwrap(), Some(Position::new(10, 10, 700, 556)));
}

#[test]
fn no_temp_file_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("1080p60hz", Position::new(0, 0, 1920, 1080)).unwrap();
    assert!(!store.path().with_extension("tmp").exists());
}

#[test]
fn corrupt_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "{not json").unwrap();
    assert!(matches!(store.load(), Err(OverscanError::StoreParse(_))));
}

#[test]
fn empty_file_is_empty_map() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "  \n").unwrap();
    assert!(store.load().unwrap().is_empty());
}
