// src/filter.rs
//
// State + course filtering over the working dataset.
//
// - Query: the two search inputs, folded (trimmed + lower-cased) once.
// - FilterView: zero-copy projection of matching row indices.
// - filter(): owned convenience wrapper.

use crate::record::CollegeRecord;
use crate::sanitize::fold;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    state: String,
    course: String,
}

impl Query {
    pub fn new(state: &str, course: &str) -> Self {
        Self { state: fold(state), course: fold(course) }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.state.is_empty() && self.course.is_empty() }

    /// State: equal, or the record's state contains the query.
    /// Course: the record's courses string contains the query.
    /// An empty query dimension matches everything.
    pub fn matches(&self, c: &CollegeRecord) -> bool {
        let match_state = self.state.is_empty() || {
            let cstate = c.state.to_lowercase();
            cstate == self.state || cstate.contains(&self.state)
        };
        let match_course = self.course.is_empty()
            || c.courses.to_lowercase().contains(&self.course);
        match_state && match_course
    }
}

/// Matching positions in a borrowed dataset, in source order.
#[derive(Clone, Debug)]
pub struct FilterView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a [CollegeRecord],
}

impl<'a> FilterView<'a> {
    pub fn new(raw: &'a [CollegeRecord], q: &Query) -> Self {
        if q.is_empty() {
            return Self { row_ix: (0..raw.len()).collect(), raw };
        }
        let row_ix = raw
            .iter()
            .enumerate()
            .filter(|(_, c)| q.matches(c))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single record by projected index (no cloning).
    pub fn get(&self, i: usize) -> Option<&'a CollegeRecord> {
        self.row_ix.get(i).and_then(|&ix| self.raw.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CollegeRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.get(ix))
    }

    /// Materialize owned records (for render/export boundaries).
    pub fn to_owned_records(&self) -> Vec<CollegeRecord> {
        self.iter().cloned().collect()
    }
}

/// Records whose state and courses match both queries. Source is untouched.
pub fn filter(dataset: &[CollegeRecord], state: &str, course: &str) -> Vec<CollegeRecord> {
    FilterView::new(dataset, &Query::new(state, course)).to_owned_records()
}
