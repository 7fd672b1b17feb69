// src/controller.rs
//
// Page controller: turns user actions into store/filter/render calls.
// Holds the single DatasetStore for the session and the current view
// descriptions; front-ends only read those and forward events.
//
//   Uninitialized ─init→ AwaitingProfile ─submit/skip→ Ready
//   Uninitialized ─init→ Ready (stored profile)
//   Ready ─edit→ EditingProfile ─submit/cancel→ Ready
//   any ─reset (confirmed)→ Uninitialized ─init→ …

use std::path::{Path, PathBuf};

use crate::catalog::STATES;
use crate::config::options::CardLimits;
use crate::filter::{FilterView, Query};
use crate::record::UserProfile;
use crate::render::{profile_view, results_view, ProfileView, ResultsView};
use crate::store::{DatasetStore, KeyValue};
use crate::upload::{parse_upload, read_upload};
use crate::validate::{require, FieldError};

pub const RESET_PROMPT: &str =
    "This will clear saved user info and uploaded dataset from this device. Continue?";
pub const RESET_DONE: &str = "Cleared. Reloading...";

/// Alerts and confirmations, supplied by the front-end.
pub trait Notifier {
    fn notify(&mut self, msg: &str);
    fn confirm(&mut self, msg: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    Uninitialized,
    AwaitingProfile,
    Ready,
    EditingProfile,
}

impl PageState {
    /// Whether the profile dialog is open.
    pub fn shows_profile_form(self) -> bool {
        matches!(self, PageState::AwaitingProfile | PageState::EditingProfile)
    }
}

/// Editable buffer behind the profile dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub state: String,
    pub mobile: String,
    pub course: String,
}

impl ProfileForm {
    /// Empty form with the first state pre-selected.
    pub fn blank() -> Self {
        Self { state: s!(STATES[0]), ..Self::default() }
    }

    pub fn from_profile(u: &UserProfile) -> Self {
        Self {
            name: u.name.clone(),
            state: if u.state.is_empty() { s!(STATES[0]) } else { u.state.clone() },
            mobile: u.mobile.clone(),
            course: u.course.clone(),
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Please enter your name.");
        errors
    }

    /// Name, mobile and course are trimmed; state is taken as selected.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: s!(self.name.trim()),
            state: self.state.clone(),
            mobile: s!(self.mobile.trim()),
            course: s!(self.course.trim()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchInputs {
    pub state: String,
    pub course: String,
}

pub struct Controller<K: KeyValue> {
    store: DatasetStore<K>,
    limits: CardLimits,
    state: PageState,
    pub form: ProfileForm,
    pub form_errors: Vec<FieldError>,
    pub search: SearchInputs,
    results: ResultsView,
    profile: ProfileView,
}

impl<K: KeyValue> Controller<K> {
    pub fn new(kv: K, limits: CardLimits) -> Self {
        Self {
            store: DatasetStore::open(kv),
            limits,
            state: PageState::Uninitialized,
            form: ProfileForm::blank(),
            form_errors: Vec::new(),
            search: SearchInputs::default(),
            results: ResultsView::default(),
            profile: profile_view(None),
        }
    }

    /* ---------- read side ---------- */

    pub fn state(&self) -> PageState { self.state }
    pub fn results(&self) -> &ResultsView { &self.results }
    pub fn profile(&self) -> &ProfileView { &self.profile }
    pub fn store(&self) -> &DatasetStore<K> { &self.store }
    pub fn user(&self) -> Option<UserProfile> { self.store.load_user() }

    /* ---------- lifecycle ---------- */

    pub fn init(&mut self) {
        let user = self.store.load_user();
        self.profile = profile_view(user.as_ref());
        self.form_errors.clear();

        match &user {
            None => {
                self.form = ProfileForm::blank();
                self.state = PageState::AwaitingProfile;
            }
            Some(u) => {
                self.search = SearchInputs { state: u.state.clone(), course: u.course.clone() };
                self.state = PageState::Ready;
            }
        }
        self.results = results_view(self.store.colleges(), self.limits.initial);
        logf!(
            "Init: state={:?}, records={}, source={:?}",
            self.state,
            self.store.colleges().len(),
            self.store.source()
        );
    }

    /* ---------- profile dialog ---------- */

    /// Save the form as the profile. Returns false (nothing saved) on any error.
    pub fn submit_profile(&mut self, n: &mut dyn Notifier) -> bool {
        self.form_errors = self.form.validate();
        if !self.form_errors.is_empty() {
            logd!("Profile: rejected ({} error(s))", self.form_errors.len());
            return false;
        }
        let user = self.form.to_profile();
        if let Err(e) = self.store.save_user(&user) {
            loge!("Profile: save failed: {}", e);
            n.notify(&format!("Could not save your info: {e}"));
            return false;
        }
        self.profile = profile_view(Some(&user));
        self.state = PageState::Ready;
        logf!("Profile: saved");
        true
    }

    pub fn skip(&mut self) {
        if self.state == PageState::AwaitingProfile {
            self.form_errors.clear();
            self.state = PageState::Ready;
        }
    }

    pub fn edit(&mut self) {
        if self.state != PageState::Ready { return; }
        self.form = match self.store.load_user() {
            Some(u) => ProfileForm::from_profile(&u),
            None => ProfileForm::blank(),
        };
        self.form_errors.clear();
        self.state = PageState::EditingProfile;
    }

    pub fn cancel_edit(&mut self) {
        if self.state == PageState::EditingProfile {
            self.form_errors.clear();
            self.state = PageState::Ready;
        }
    }

    /* ---------- results ---------- */

    /// Filter the working set with the current search inputs. Returns the hit count.
    pub fn search(&mut self) -> usize {
        let q = Query::new(&self.search.state, &self.search.course);
        let view = FilterView::new(self.store.colleges(), &q);
        logf!(
            "Search: state={:?}, course={:?} → {} hit(s)",
            self.search.state, self.search.course, view.len()
        );
        self.results = results_view(&view.to_owned_records(), usize::MAX);
        view.len()
    }

    pub fn show_all(&mut self) {
        self.results = results_view(self.store.colleges(), self.limits.show_all);
    }

    /* ---------- upload ---------- */

    /// Completion of a file read. On any failure the dataset and the
    /// rendered cards stay as they were.
    pub fn apply_upload(&mut self, file_name: &str, text: &str, n: &mut dyn Notifier) -> bool {
        let records = match parse_upload(file_name, text) {
            Ok(r) => r,
            Err(e) => {
                logd!("Upload: {} rejected: {}", file_name, e);
                n.notify(&e.to_string());
                return false;
            }
        };
        let count = records.len();
        if let Err(e) = self.store.replace_dataset(records) {
            loge!("Upload: persisting dataset failed: {}", e);
            n.notify(&format!("Could not store dataset: {e}"));
            return false;
        }
        n.notify(&format!(
            "Dataset loaded: {count} records. Use filters to find colleges."
        ));
        self.results = results_view(self.store.colleges(), self.limits.upload);
        true
    }

    /// Synchronous read + apply, for front-ends without a background reader.
    pub fn upload_path(&mut self, path: &Path, n: &mut dyn Notifier) -> bool {
        match read_upload(path) {
            Ok(f) => self.apply_upload(&f.name, &f.text, n),
            Err(e) => {
                loge!("Upload: read {} failed: {}", path.display(), e);
                n.notify(&format!("Could not read file: {e}"));
                false
            }
        }
    }

    /* ---------- download / reset ---------- */

    pub fn download(&self, path: &Path) -> crate::Result<PathBuf> {
        let written = crate::file::write_profile_csv(path, self.store.load_user().as_ref())?;
        logf!("Download: wrote {}", written.display());
        Ok(written)
    }

    /// Clear both cache keys and start over. Needs confirmation.
    pub fn reset(&mut self, n: &mut dyn Notifier) -> bool {
        if !n.confirm(RESET_PROMPT) {
            logd!("Reset: cancelled");
            return false;
        }
        if let Err(e) = self.store.clear() {
            loge!("Reset: clear failed: {}", e);
            n.notify(&format!("Could not clear saved data: {e}"));
            return false;
        }
        n.notify(RESET_DONE);
        logf!("Reset: cache cleared");

        self.store.reload();
        self.state = PageState::Uninitialized;
        self.search = SearchInputs::default();
        self.init();
        true
    }
}
