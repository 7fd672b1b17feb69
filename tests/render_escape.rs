// tests/render_escape.rs
//
// View descriptions and their HTML projection.
//
use collegefinder::catalog::sample;
use collegefinder::record::{CollegeRecord, UserProfile};
use collegefinder::render::{card_view, profile_view, results_view, NO_PROFILE, WELCOME};

#[test]
fn script_in_name_is_escaped() {
    let rec = CollegeRecord {
        name: "<script>alert('x')</script>".into(),
        website: "javascript:\"boom\"".into(),
        ..CollegeRecord::default()
    };
    let html = results_view(&[rec], 10).to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("href=\"javascript:&quot;boom&quot;\""));
}

#[test]
fn empty_list_shows_no_results_and_plain_heading() {
    let view = results_view(&[], 50);
    assert!(view.no_results);
    assert_eq!(view.heading, "Colleges");
    assert!(view.cards.is_empty());
    assert!(view.to_html().contains("no-results"));
}

#[test]
fn heading_counts_the_cards_shown() {
    let data = sample();
    let view = results_view(&data, 2);
    assert_eq!(view.heading, "Colleges (2)");
    assert_eq!(view.cards.len(), 2);

    let view = results_view(&data, 50);
    assert_eq!(view.heading, format!("Colleges ({})", data.len()));
}

#[test]
fn card_truncates_courses_and_fills_placeholders() {
    let rec = CollegeRecord {
        name: "Many".into(),
        city: "Pune".into(),
        state: "Maharashtra".into(),
        courses: "A, B,,C,D,E,F,G,H".into(),
        ..CollegeRecord::default()
    };
    let card = card_view(&rec);
    assert_eq!(card.courses, "A, B, C, D, E, F");
    assert_eq!(card.location, "Pune, Maharashtra");
    assert_eq!(card.fees, "N/A");
    assert_eq!(card.cutoff, "N/A");
    assert_eq!(card.website, None);
}

#[test]
fn website_link_only_when_present() {
    let data = sample();
    let with = card_view(&data[0]);
    assert_eq!(with.website.as_deref(), Some("https://hansraj.du.ac.in"));
    assert!(with.to_html().contains("Website</a>"));

    let without = card_view(&data[5]);
    assert!(!without.to_html().contains("<a "));
}

#[test]
fn profile_greeting_uses_first_name() {
    let u = UserProfile { name: "Ravi Kumar".into(), state: "Bihar".into(), ..UserProfile::default() };
    let view = profile_view(Some(&u));
    assert_eq!(view.greeting, "Hi Ravi 👋");
    let saved = view.saved.unwrap();
    assert_eq!(saved.detail, "Bihar • ");

    let none = profile_view(None);
    assert_eq!(none.greeting, WELCOME);
    assert!(none.to_html().contains(NO_PROFILE));
}

#[test]
fn profile_html_is_escaped() {
    let u = UserProfile { name: "<b>Eve</b>".into(), ..UserProfile::default() };
    let html = profile_view(Some(&u)).to_html();
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
}
