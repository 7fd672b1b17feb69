// tests/handoff_query.rs
//
// Query-parameter flow: encoding, decoding, per-page validation.
//
use collegefinder::catalog::sample;
use collegefinder::filter::FilterView;
use collegefinder::handoff::{decode_component, encode_component, Handoff, HandoffPage};
use collegefinder::validate::is_valid_mobile;

fn details() -> Handoff {
    Handoff {
        name: "Anil & Sons".into(),
        mobile: "9876543210".into(),
        stream: "Commerce".into(),
        ..Handoff::default()
    }
}

#[test]
fn components_encode_form_style() {
    assert_eq!(encode_component("Tamil Nadu"), "Tamil+Nadu");
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_component("₹"), "%E2%82%B9");
    assert_eq!(decode_component("Tamil+Nadu"), "Tamil Nadu");
    assert_eq!(decode_component("%E2%82%B9"), "₹");
    assert_eq!(decode_component("100%"), "100%");
    assert_eq!(decode_component("%zz"), "%zz");
}

#[test]
fn literal_plus_survives_the_round_trip() {
    assert_eq!(encode_component("C++ & Java"), "C%2B%2B+%26+Java");
    assert_eq!(decode_component("C%2B%2B+%26+Java"), "C++ & Java");
    assert_eq!(decode_component("a+b%2Bc"), "a b+c");
}

#[test]
fn query_round_trips_through_an_address() {
    let mut h = details();
    h.state = "Tamil Nadu".into();
    h.course = "B.Com".into();
    let url = format!("https://example.test/results.html?{}#top", h.to_query());
    assert_eq!(Handoff::from_query(&url), h);
}

#[test]
fn unknown_keys_ignored_and_last_value_wins() {
    let h = Handoff::from_query("?name=A&utm=x&name=B&state=Goa");
    assert_eq!(h.name, "B");
    assert_eq!(h.state, "Goa");
    assert_eq!(h.mobile, "");
}

#[test]
fn details_page_validates_name_mobile_stream() {
    let errors = Handoff { mobile: "12345".into(), ..Handoff::default() }.validate(HandoffPage::Details);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["name", "mobile", "stream"]);

    assert!(details().validate(HandoffPage::Details).is_empty());
}

#[test]
fn mobile_rules() {
    assert!(is_valid_mobile("9876543210"));
    assert!(is_valid_mobile("919876543210123"));
    assert!(!is_valid_mobile("12345"));
    assert!(!is_valid_mobile("9196543210123456"));
    assert!(!is_valid_mobile("98765-43210"));
    assert!(!is_valid_mobile(""));
}

#[test]
fn next_url_carries_fields_forward() {
    let url = details().next_url(HandoffPage::Details).unwrap();
    assert_eq!(url, "choose.html?name=Anil+%26+Sons&mobile=9876543210&stream=Commerce");

    let mut h = Handoff::from_query(&url);
    assert!(h.next_url(HandoffPage::Choice).is_err());
    h.state = "Delhi".into();
    let url = h.next_url(HandoffPage::Choice).unwrap();
    assert!(url.starts_with("results.html?"));
    assert!(url.ends_with("&state=Delhi"));
}

#[test]
fn results_page_filters_with_carried_state_and_course() {
    let h = Handoff::from_query("results.html?name=X&state=delhi&course=m.com");
    let data = sample();
    let view = FilterView::new(&data, &h.query());
    assert_eq!(view.len(), 1);
    assert_eq!(view.get(0).map(|c| c.name.as_str()), Some("SRCC"));
    assert_eq!(h.to_profile().name, "X");
}
