// src/handoff.rs
//
// The storage-free variant: three pages pass the visitor's answers along in
// the address as `application/x-www-form-urlencoded` pairs.
//
//   index.html   (name, mobile, stream)
//   → choose.html  (+ state, course)
//   → results.html (reads everything back, filters)

use crate::filter::Query;
use crate::record::UserProfile;
use crate::validate::{check_mobile, require, FieldError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandoffPage {
    Details,
    Choice,
    Results,
}

impl HandoffPage {
    pub fn path(self) -> &'static str {
        match self {
            HandoffPage::Details => "index.html",
            HandoffPage::Choice => "choose.html",
            HandoffPage::Results => "results.html",
        }
    }

    pub fn next(self) -> Option<HandoffPage> {
        match self {
            HandoffPage::Details => Some(HandoffPage::Choice),
            HandoffPage::Choice => Some(HandoffPage::Results),
            HandoffPage::Results => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Handoff {
    pub name: String,
    pub mobile: String,
    pub stream: String,
    pub state: String,
    pub course: String,
}

impl Handoff {
    fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("mobile", self.mobile.as_str()),
            ("stream", self.stream.as_str()),
            ("state", self.state.as_str()),
            ("course", self.course.as_str()),
        ]
    }

    fn slot(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "name" => Some(&mut self.name),
            "mobile" => Some(&mut self.mobile),
            "stream" => Some(&mut self.stream),
            "state" => Some(&mut self.state),
            "course" => Some(&mut self.course),
            _ => None,
        }
    }

    /// Non-empty fields in KEYS order, without the leading '?'.
    pub fn to_query(&self) -> String {
        self.pairs()
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Accepts a bare query, `?query`, or a full address. Unknown keys are
    /// ignored; a repeated key keeps its last value.
    pub fn from_query(text: &str) -> Self {
        let q = match text.find('?') {
            Some(ix) => &text[ix + 1..],
            None => text,
        };
        let q = q.split('#').next().unwrap_or("");

        let mut out = Self::default();
        for part in q.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = part.split_once('=').unwrap_or((part, ""));
            let key = decode_component(k);
            if let Some(slot) = out.slot(&key) {
                *slot = decode_component(v).trim().to_string();
            }
        }
        out
    }

    /// Everything the given page collects must be present and well-formed.
    pub fn validate(&self, page: HandoffPage) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match page {
            HandoffPage::Details => {
                require(&mut errors, "name", &self.name, "Please enter your name.");
                check_mobile(&mut errors, "mobile", &self.mobile);
                require(&mut errors, "stream", &self.stream, "Please select a stream.");
            }
            HandoffPage::Choice => {
                require(&mut errors, "state", &self.state, "Please select a state.");
            }
            HandoffPage::Results => {}
        }
        errors
    }

    /// Address of the page after `from`, or the inline errors blocking it.
    pub fn next_url(&self, from: HandoffPage) -> Result<String, Vec<FieldError>> {
        let errors = self.validate(from);
        if !errors.is_empty() {
            return Err(errors);
        }
        let Some(next) = from.next() else { return Ok(from.path().to_string()) };
        let query = self.to_query();
        if query.is_empty() {
            Ok(next.path().to_string())
        } else {
            Ok(format!("{}?{}", next.path(), query))
        }
    }

    pub fn query(&self) -> Query {
        Query::new(&self.state, &self.course)
    }

    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            state: self.state.clone(),
            mobile: self.mobile.clone(),
            course: self.course.clone(),
        }
    }
}

/* ---------------- form-urlencoding ---------------- */

/// Percent-encoded UTF-8 with space as '+'.
pub fn encode_component(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

/// '+' → space, then %XX → byte. Malformed escapes pass through literally.
pub fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
