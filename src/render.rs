// src/render.rs
//
// Pure projections from records/profile to view descriptions.
// Front-ends (egui, terminal) apply these; `to_html` is the markup form and
// escapes every piece of record or profile text.

use std::fmt::Write as _;

use crate::config::consts::MAX_COURSE_TOKENS;
use crate::record::{CollegeRecord, UserProfile};
use crate::sanitize::{escape_html, first_word};

pub const RESULTS_LABEL: &str = "Colleges";
pub const NO_RESULTS: &str = "No colleges match your filters.";
pub const WELCOME: &str = "Welcome to College Finder! 🎉";
pub const NO_PROFILE: &str = "No saved user info.";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    /// "city, state"
    pub location: String,
    /// First few course tokens, ", "-joined. Empty if none.
    pub courses: String,
    pub state: String,
    pub fees: String,
    pub cutoff: String,
    pub contact: String,
    pub website: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsView {
    pub heading: String,
    pub no_results: bool,
    pub cards: Vec<CardView>,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self { heading: s!(RESULTS_LABEL), no_results: false, cards: Vec::new() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub greeting: String,
    /// None → nothing saved.
    pub saved: Option<SavedInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedInfo {
    pub name: String,
    /// "state • course"
    pub detail: String,
    pub mobile: String,
}

fn or_na(s: &str) -> String {
    if s.is_empty() { s!(NOT_AVAILABLE) } else { s!(s) }
}

/// Up to MAX_COURSE_TOKENS trimmed, non-empty tokens.
pub fn course_tokens(courses: &str) -> Vec<&str> {
    courses
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(MAX_COURSE_TOKENS)
        .collect()
}

pub fn card_view(c: &CollegeRecord) -> CardView {
    CardView {
        name: c.name.clone(),
        location: format!("{}, {}", c.city, c.state),
        courses: course_tokens(&c.courses).join(", "),
        state: c.state.clone(),
        fees: or_na(&c.fees),
        cutoff: or_na(&c.cutoff),
        contact: c.contact.clone(),
        website: (!c.website.is_empty()).then(|| c.website.clone()),
    }
}

/// First `limit` records as cards; the heading counts the cards shown.
pub fn results_view(list: &[CollegeRecord], limit: usize) -> ResultsView {
    if list.is_empty() {
        return ResultsView { heading: s!(RESULTS_LABEL), no_results: true, cards: Vec::new() };
    }
    let cards: Vec<CardView> = list.iter().take(limit).map(card_view).collect();
    ResultsView {
        heading: format!("{} ({})", RESULTS_LABEL, cards.len()),
        no_results: false,
        cards,
    }
}

pub fn profile_view(user: Option<&UserProfile>) -> ProfileView {
    match user {
        None => ProfileView { greeting: s!(WELCOME), saved: None },
        Some(u) => ProfileView {
            greeting: join!("Hi ", first_word(&u.name), " 👋"),
            saved: Some(SavedInfo {
                name: u.name.clone(),
                detail: join!(&u.state, " • ", &u.course),
                mobile: u.mobile.clone(),
            }),
        },
    }
}

/* ---------------- HTML ---------------- */

impl CardView {
    pub fn to_html(&self) -> String {
        let e = escape_html;
        let mut out = String::new();
        let _ = writeln!(out, "<article class=\"college-card\">");
        let _ = writeln!(out, "  <h3>{}</h3>", e(&self.name));
        let _ = writeln!(out, "  <div class=\"muted small\">{}</div>", e(&self.location));
        let badge = if self.courses.is_empty() { "Courses" } else { self.courses.as_str() };
        let _ = writeln!(
            out,
            "  <p title=\"{}\"><span class=\"badge course\">{}</span> <span class=\"badge state\">{}</span></p>",
            e(&self.courses), e(badge), e(&self.state)
        );
        let _ = writeln!(
            out,
            "  <p class=\"small\"><strong>Fees:</strong> {} · <strong>Cutoff:</strong> {}</p>",
            e(&self.fees), e(&self.cutoff)
        );
        let link = match &self.website {
            Some(url) => format!(" · <a href=\"{}\" target=\"_blank\">Website</a>", e(url)),
            None => s!(),
        };
        let _ = writeln!(out, "  <p class=\"muted small\">{}{}</p>", e(&self.contact), link);
        out.push_str("</article>\n");
        out
    }
}

impl ResultsView {
    pub fn to_html(&self) -> String {
        let mut out = format!("<h2>{}</h2>\n", escape_html(&self.heading));
        if self.no_results {
            let _ = writeln!(out, "<div class=\"no-results\">{}</div>", NO_RESULTS);
            return out;
        }
        for card in &self.cards {
            out.push_str(&card.to_html());
        }
        out
    }
}

impl ProfileView {
    pub fn to_html(&self) -> String {
        let e = escape_html;
        let mut out = format!("<h1>{}</h1>\n", e(&self.greeting));
        match &self.saved {
            None => {
                let _ = writeln!(out, "<div class=\"muted small\">{}</div>", NO_PROFILE);
            }
            Some(s) => {
                let _ = writeln!(out, "<strong>{}</strong>", e(&s.name));
                let _ = writeln!(out, "<div class=\"muted small\">{}</div>", e(&s.detail));
                let _ = writeln!(out, "<div class=\"muted small\">📱 {}</div>", e(&s.mobile));
            }
        }
        out
    }
}
