// tests/store_roundtrip.rs
//
// Dataset store over both backends: persistence, absence, sample fallback.
//
use std::fs;

use collegefinder::catalog::sample;
use collegefinder::config::consts::{COLLEGES_KEY, USER_KEY};
use collegefinder::record::{CollegeRecord, UserProfile};
use collegefinder::store::{DatasetStore, FileKv, KeyValue, MemoryKv, Source};

fn user() -> UserProfile {
    UserProfile {
        name: "Asha Rao".into(),
        state: "Karnataka".into(),
        mobile: "9876543210".into(),
        course: "BCA".into(),
    }
}

#[test]
fn profile_roundtrip_and_clear() {
    let mut store = DatasetStore::open(MemoryKv::new());
    assert_eq!(store.load_user(), None);

    store.save_user(&user()).unwrap();
    assert_eq!(store.load_user(), Some(user()));

    store.clear().unwrap();
    assert_eq!(store.load_user(), None);
    assert_eq!(store.load_colleges(), None);
}

#[test]
fn missing_dataset_falls_back_to_sample() {
    let store = DatasetStore::open(MemoryKv::new());
    assert_eq!(store.source(), Source::Sample);
    assert_eq!(store.colleges(), sample().as_slice());
}

#[test]
fn stored_empty_dataset_does_not_replace_sample() {
    let mut kv = MemoryKv::new();
    kv.set(COLLEGES_KEY, "[]").unwrap();
    let store = DatasetStore::open(kv);
    assert_eq!(store.source(), Source::Sample);
}

#[test]
fn unparsable_entries_read_as_absent() {
    let mut kv = MemoryKv::new();
    kv.set(USER_KEY, "{oops").unwrap();
    kv.set(COLLEGES_KEY, "not json either").unwrap();
    let store = DatasetStore::open(kv);
    assert_eq!(store.load_user(), None);
    assert_eq!(store.source(), Source::Sample);
}

#[test]
fn partial_stored_records_fill_defaults() {
    let mut kv = MemoryKv::new();
    kv.set(COLLEGES_KEY, r#"[{"name":"Only Name"}]"#).unwrap();
    let store = DatasetStore::open(kv);
    assert_eq!(store.source(), Source::Stored);
    assert_eq!(
        store.colleges(),
        &[CollegeRecord { name: "Only Name".into(), ..CollegeRecord::default() }]
    );
}

#[test]
fn file_backend_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let replacement = vec![CollegeRecord { name: "Fresh".into(), ..CollegeRecord::default() }];

    {
        let mut store = DatasetStore::open(FileKv::new(dir.path()));
        store.save_user(&user()).unwrap();
        store.replace_dataset(replacement.clone()).unwrap();
        assert_eq!(store.colleges(), replacement.as_slice());
    }

    let store = DatasetStore::open(FileKv::new(dir.path()));
    assert_eq!(store.source(), Source::Stored);
    assert_eq!(store.colleges(), replacement.as_slice());
    assert_eq!(store.load_user(), Some(user()));
    assert!(dir.path().join(format!("{USER_KEY}.json")).exists());
}

#[test]
fn file_backend_clear_tolerates_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DatasetStore::open(FileKv::new(dir.path().join("nested")));
    store.clear().unwrap();
    store.save_user(&user()).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load_user(), None);
    assert!(fs::read_dir(store.kv().dir()).unwrap().next().is_none());
}
