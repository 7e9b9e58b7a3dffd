use pretty_assertions::assert_eq;

use super::*;

#[test]
fn missing_file_opens_empty_and_is_not_created() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("store.json");

	let store = FileStore::open(&path).expect("open");
	assert_eq!(store.path(), path.as_path());
	assert_eq!(store.get("notes"), None);
	assert!(!path.exists());
}

#[test]
fn values_survive_reopen() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("nested").join("store.json");

	let mut store = FileStore::open(&path).expect("open");
	store.set("notes", "[]".into()).expect("set");
	store.set("isDarkMode", "true".into()).expect("set");
	drop(store);

	let reopened = FileStore::open(&path).expect("reopen");
	assert_eq!(reopened.get("notes").as_deref(), Some("[]"));
	assert_eq!(reopened.get("isDarkMode").as_deref(), Some("true"));
}

#[test]
fn remove_is_persisted() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("store.json");

	let mut store = FileStore::open(&path).expect("open");
	store.set("notes", "[]".into()).expect("set");
	store.remove("notes").expect("remove");
	store.remove("never-set").expect("remove absent");

	let reopened = FileStore::open(&path).expect("reopen");
	assert_eq!(reopened.get("notes"), None);
}

#[test]
fn corrupt_file_opens_empty_and_is_overwritten_on_write() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("store.json");
	std::fs::write(&path, "{{{ definitely not json").expect("write");

	let mut store = FileStore::open(&path).expect("open");
	assert_eq!(store.get("notes"), None);

	store.set("isDarkMode", "false".into()).expect("set");
	let content = std::fs::read_to_string(&path).expect("read back");
	let parsed: BTreeMap<String, String> = serde_json::from_str(&content).expect("json object");
	assert_eq!(parsed.get("isDarkMode").map(String::as_str), Some("false"));
}

#[test]
fn directory_path_is_an_io_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let err = FileStore::open(dir.path()).expect_err("directory is not a store file");
	assert!(matches!(err, StoreError::Io { .. }));
}
