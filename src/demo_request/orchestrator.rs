use std::collections::BTreeMap;

use log::{info, warn};

use super::fields::{DemoRequest, FieldId, LeadRecord};
use super::store::SubmissionOutcome;
use super::validation::{validate_field, validate_form};

pub const SUBMIT_LABEL: &str = "Request Demo";
pub const PENDING_LABEL: &str = "Sending...";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again or contact us directly.";
pub const BANNER_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    /// Terminal: the form is replaced by the success panel.
    Succeeded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: u32,
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
    pub loading: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub errored: bool,
    pub message: Option<&'static str>,
}

/// Everything the demo form shows, for one form instance. The component
/// renders from this and nothing else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoFormState {
    pub values: DemoRequest,
    errors: BTreeMap<FieldId, &'static str>,
    phase: Phase,
    banner: Option<Banner>,
    next_banner_id: u32,
}

impl DemoFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn show_field_error(&mut self, field: FieldId, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn clear_field_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    fn revalidate(&mut self, field: FieldId) {
        match validate_field(field, self.values.value(field)) {
            Ok(()) => self.clear_field_error(field),
            Err(err) => self.show_field_error(field, err.message),
        }
    }

    /// Typing only re-checks a field that is already flagged, so errors go
    /// away as soon as the value is fixed but never appear mid-typing.
    pub fn input(&mut self, field: FieldId, value: String) {
        self.values.set(field, value);
        if self.has_error(field) {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: FieldId) {
        self.revalidate(field);
    }

    /// Validates everything and, if it all passes, moves to `Submitting` and
    /// hands back the record to write. Returns `None` when a field fails or
    /// when a submission is already in flight or done.
    pub fn request_submit(&mut self) -> Option<LeadRecord> {
        if self.phase != Phase::Idle {
            warn!("Ignoring submit while {:?}", self.phase);
            return None;
        }

        let validation = validate_form(&self.values);
        for field in FieldId::ALL {
            match validation.error_for(field) {
                Some(message) => self.show_field_error(field, message),
                None => self.clear_field_error(field),
            }
        }

        if !validation.is_valid() {
            info!("Demo request has {} invalid field(s)", validation.errors.len());
            return None;
        }

        self.phase = Phase::Submitting;
        Some(LeadRecord::from_request(&self.values))
    }

    /// Applies the result of the remote write. Either way the submit control
    /// leaves its pending state.
    pub fn settle(&mut self, outcome: SubmissionOutcome) {
        if self.phase != Phase::Submitting {
            warn!("Dropping outcome {:?}, no submission in flight", outcome);
            return;
        }

        match outcome {
            SubmissionOutcome::Success => {
                self.phase = Phase::Succeeded;
                self.banner = None;
            }
            SubmissionOutcome::Failure(_) => {
                self.phase = Phase::Idle;
                self.show_form_error(FAILURE_MESSAGE);
            }
        }
    }

    /// Replaces any visible banner. The returned id identifies this banner for
    /// dismissal.
    pub fn show_form_error(&mut self, message: &'static str) -> u32 {
        self.next_banner_id = self.next_banner_id.wrapping_add(1);
        let id = self.next_banner_id;
        self.banner = Some(Banner { id, message });
        id
    }

    /// Removes banner `id` if it is still the one shown. A stale id (already
    /// dismissed or replaced) changes nothing and returns false.
    pub fn dismiss_banner(&mut self, id: u32) -> bool {
        match &self.banner {
            Some(banner) if banner.id == id => {
                self.banner = None;
                true
            }
            _ => false,
        }
    }

    /// Timer-driven removal of banner `id`. Same rules as a manual dismissal:
    /// a banner that was replaced or dismissed meanwhile stays untouched.
    pub fn expire_banner(&mut self, id: u32) -> bool {
        let expired = self.dismiss_banner(id);
        if !expired {
            info!("Banner {} already gone, nothing to expire", id);
        }
        expired
    }

    pub fn field_view(&self, field: FieldId) -> FieldView {
        let message = self.errors.get(&field).copied();
        FieldView { errored: message.is_some(), message }
    }

    pub fn submit_control(&self) -> SubmitControl {
        match self.phase {
            Phase::Submitting => SubmitControl { label: PENDING_LABEL, disabled: true, loading: true },
            Phase::Idle | Phase::Succeeded => SubmitControl { label: SUBMIT_LABEL, disabled: false, loading: false },
        }
    }

    pub fn show_success(&self) -> bool {
        self.phase == Phase::Succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_request::fields::LeadStatus;
    use crate::demo_request::store::{persist_lead, MockLeadStore, StoreError};
    use crate::demo_request::validation::{EMAIL_INVALID, NAME_REQUIRED};
    use pretty_assertions::assert_eq;

    fn filled(name: &str, email: &str, store_type: &str, company: &str) -> DemoFormState {
        let mut state = DemoFormState::new();
        state.input(FieldId::Name, name.into());
        state.input(FieldId::Email, email.into());
        state.input(FieldId::StoreType, store_type.into());
        state.input(FieldId::Company, company.into());
        state
    }

    fn idle_control() -> SubmitControl {
        SubmitControl { label: SUBMIT_LABEL, disabled: false, loading: false }
    }

    #[test]
    fn happy_path_writes_once_and_shows_success() {
        let mut state = filled("Jo Lee", "jo@example.com", "boutique", "Lee Co");

        let record = state.request_submit().expect("valid form submits");
        assert_eq!(state.phase(), Phase::Submitting);
        assert_eq!(
            state.submit_control(),
            SubmitControl { label: PENDING_LABEL, disabled: true, loading: true }
        );
        for field in FieldId::ALL {
            assert!(!state.field_view(field).errored);
        }

        let mut store = MockLeadStore::new();
        store
            .expect_add_lead()
            .withf(|record| record.status == LeadStatus::New && record.store_type == "boutique")
            .times(1)
            .returning(|_| Ok(()));

        let outcome = tokio_test::block_on(persist_lead(Some(&store), &record));
        state.settle(outcome);

        assert!(state.show_success());
        assert_eq!(state.submit_control(), idle_control());
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn invalid_email_blocks_the_write() {
        let mut state = filled("Jo Lee", "not-an-email", "boutique", "Lee Co");

        assert_eq!(state.request_submit(), None);

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(
            state.field_view(FieldId::Email),
            FieldView { errored: true, message: Some(EMAIL_INVALID) }
        );
        assert!(!state.field_view(FieldId::Name).errored);
        assert!(!state.field_view(FieldId::Company).errored);
        assert_eq!(state.submit_control(), idle_control());
    }

    #[test]
    fn remote_failure_shows_banner_and_restores_control() {
        let mut state = filled("Jo Lee", "jo@example.com", "boutique", "Lee Co");
        let record = state.request_submit().unwrap();

        let mut store = MockLeadStore::new();
        store
            .expect_add_lead()
            .times(1)
            .returning(|_| Err(StoreError::Network("offline".into())));

        state.settle(tokio_test::block_on(persist_lead(Some(&store), &record)));

        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.show_success());
        assert_eq!(state.submit_control(), idle_control());
        let banner = state.banner().cloned().expect("banner shown");
        assert_eq!(banner.message, FAILURE_MESSAGE);

        // the user can try again straight away
        assert!(state.request_submit().is_some());
    }

    #[test]
    fn missing_store_still_succeeds() {
        let mut state = filled("Jo Lee", "jo@example.com", "boutique", "Lee Co");
        let record = state.request_submit().unwrap();

        state.settle(tokio_test::block_on(persist_lead(None, &record)));

        assert!(state.show_success());
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn no_second_submit_while_in_flight_or_after_success() {
        let mut state = filled("Jo Lee", "jo@example.com", "boutique", "Lee Co");
        assert!(state.request_submit().is_some());
        assert_eq!(state.request_submit(), None);

        state.settle(SubmissionOutcome::Success);
        assert_eq!(state.request_submit(), None);
        assert!(state.show_success());
    }

    #[test]
    fn outcome_without_submission_is_ignored() {
        let mut state = DemoFormState::new();
        let before = state.clone();
        state.settle(SubmissionOutcome::Failure("late".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn new_banner_replaces_old_and_stale_dismissal_is_a_no_op() {
        let mut state = DemoFormState::new();
        let first = state.show_form_error(FAILURE_MESSAGE);
        let second = state.show_form_error(FAILURE_MESSAGE);
        assert_ne!(first, second);
        assert_eq!(state.banner().map(|b| b.id), Some(second));

        assert!(!state.dismiss_banner(first));
        assert_eq!(state.banner().map(|b| b.id), Some(second));

        assert!(state.dismiss_banner(second));
        assert_eq!(state.banner(), None);
        assert!(!state.dismiss_banner(second));
    }

    #[test]
    fn banner_expires_after_five_seconds() {
        assert_eq!(BANNER_TIMEOUT_MS, 5_000);
    }

    #[test]
    fn expiry_removes_current_banner_only() {
        let mut state = filled("Jo Lee", "jo@example.com", "boutique", "Lee Co");
        state.request_submit().unwrap();
        state.settle(SubmissionOutcome::Failure("offline".into()));
        let first = state.banner().map(|b| b.id).expect("banner shown");

        // a second failure replaces the banner before the first timer fires
        state.request_submit().unwrap();
        state.settle(SubmissionOutcome::Failure("offline".into()));
        let second = state.banner().map(|b| b.id).expect("banner shown");

        assert!(!state.expire_banner(first));
        assert_eq!(state.banner().map(|b| b.id), Some(second));

        assert!(state.expire_banner(second));
        assert_eq!(state.banner(), None);
        assert_eq!(state.submit_control(), idle_control());

        // dismissed by hand first, then the timer fires
        let third = state.show_form_error(FAILURE_MESSAGE);
        assert!(state.dismiss_banner(third));
        assert!(!state.expire_banner(third));
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn show_then_clear_field_error_restores_state() {
        let mut state = filled("Jo Lee", "jo@example.com", "boutique", "Lee Co");
        let before = state.clone();

        state.show_field_error(FieldId::Name, "m");
        state.show_field_error(FieldId::Name, NAME_REQUIRED);
        assert_eq!(
            state.field_view(FieldId::Name),
            FieldView { errored: true, message: Some(NAME_REQUIRED) }
        );

        state.clear_field_error(FieldId::Name);
        assert_eq!(state, before);

        state.clear_field_error(FieldId::Name);
        assert_eq!(state, before);
    }

    #[test]
    fn blur_flags_and_typing_clears() {
        let mut state = DemoFormState::new();

        state.input(FieldId::Email, "jo@".into());
        assert!(!state.has_error(FieldId::Email));

        state.blur(FieldId::Email);
        assert_eq!(state.field_view(FieldId::Email).message, Some(EMAIL_INVALID));

        state.input(FieldId::Email, "jo@example".into());
        assert!(state.has_error(FieldId::Email));

        state.input(FieldId::Email, "jo@example.com".into());
        assert!(!state.has_error(FieldId::Email));
    }

    #[test]
    fn optional_fields_never_error() {
        let mut state = DemoFormState::new();
        state.blur(FieldId::Phone);
        state.blur(FieldId::Message);
        assert!(!state.has_error(FieldId::Phone));
        assert!(!state.has_error(FieldId::Message));
    }
}
