// tests/export_users.rs
//
// users.csv body and output path resolution.
//
use std::fs;

use collegefinder::file::{profile_csv, resolve_single_out_path, write_profile_csv};
use collegefinder::record::UserProfile;

fn user(name: &str) -> UserProfile {
    UserProfile {
        name: name.into(),
        state: "Goa".into(),
        mobile: "".into(),
        course: "MBA".into(),
    }
}

#[test]
fn header_then_quoted_row() {
    let text = profile_csv(Some(&user("Ravi \"RK\" Kumar")));
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("name,state,mobile,course"));
    assert_eq!(lines.next(), Some("\"Ravi \"\"RK\"\" Kumar\",\"Goa\",\"\",\"MBA\""));
    assert_eq!(lines.next(), None);
    assert!(text.ends_with('\n'));
}

#[test]
fn no_profile_gives_empty_file() {
    assert_eq!(profile_csv(None), "");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("users.csv");
    let written = write_profile_csv(&path, None).unwrap();
    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn out_path_resolution() {
    assert!(resolve_single_out_path("", "users.csv").unwrap().ends_with("users.csv"));

    let dir = tempfile::tempdir().unwrap();
    let as_dir = resolve_single_out_path(dir.path().to_str().unwrap(), "users.csv").unwrap();
    assert_eq!(as_dir, dir.path().join("users.csv"));

    let hinted = format!("{}/fresh/", dir.path().display());
    let p = resolve_single_out_path(&hinted, "users.csv").unwrap();
    assert!(dir.path().join("fresh").is_dir());
    assert!(p.ends_with("fresh/users.csv"));

    let explicit = dir.path().join("me.csv");
    let p = resolve_single_out_path(explicit.to_str().unwrap(), "users.csv").unwrap();
    assert_eq!(p, explicit);
}

#[test]
fn file_in_the_way_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    fs::write(&blocker, "x").unwrap();
    let err = write_profile_csv(&blocker.join("users.csv"), Some(&user("A")));
    assert!(err.is_err());
}
