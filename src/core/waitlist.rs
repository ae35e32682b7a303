//! Waitlist sign-up domain logic
//!
//! Owns the lifecycle of the waitlist form: raw input is validated into a
//! [`SubmissionRecord`], handed to a submission backend, and the outcome
//! drives an explicit state machine ([`WaitlistController`]). A single
//! boolean flag in client-local storage records a successful join so that
//! revisiting the page renders the success panel directly.

use serde::Serialize;
use thiserror::Error;

use super::submit::SubmissionError;

/// Local storage key for the "already joined" flag.
pub const JOINED_STORAGE_KEY: &str = "survade_waitlist_joined";

/// How long an inline form error stays visible before auto-dismissing.
pub const ERROR_DISMISS_MS: u32 = 5_000;

/// Generic user-facing message for any failed submission. The underlying
/// error detail is logged, never shown.
pub const SUBMIT_FAILED_MSG: &str = "Something went wrong. Please try again.";

/// The constrained option set for the specialty select.
pub const SPECIALTIES: &[&str] = &[
    "General Practice",
    "Cardiology",
    "Pediatrics",
    "Dermatology",
    "Oncology",
    "Psychiatry",
    "Nursing",
    "Other",
];

/// Raw form input as typed by the user, before any trimming or validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSignup {
    pub name: String,
    pub email: String,
    pub specialty: String,
}

/// A validated waitlist entry, built at submit time and discarded once the
/// submission settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub specialty: String,
}

/// User-input problems. Always recoverable: the form stays editable and the
/// message is shown inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Validate raw input, short-circuiting on the first failure.
pub fn validate(input: &RawSignup) -> Result<SubmissionRecord, ValidationError> {
    let name = input.name.trim();
    let email = input.email.trim();
    let specialty = input.specialty.trim();

    if name.is_empty() || email.is_empty() || specialty.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(SubmissionRecord {
        name: name.to_owned(),
        email: email.to_owned(),
        specialty: specialty.to_owned(),
    })
}

/// Check the `local@domain.tld` shape: no whitespace, exactly one `@`,
/// non-empty local part, and a dot inside the domain with at least one
/// character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// The three renderable form states. `Success` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editable,
    Submitting,
    Success,
}

/// Persistence for the single "joined" flag.
pub trait JoinedStore {
    fn load(&self) -> bool;
    fn mark_joined(&self);
}

/// Joined flag persisted in browser local storage. Storage failures are
/// swallowed: the flag is an optimization, not a source of truth.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl JoinedStore for LocalStorageStore {
    fn load(&self) -> bool {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::web_sys;
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(value)) = storage.get_item(JOINED_STORAGE_KEY) {
                        return value == "true";
                    }
                }
            }
        }
        false
    }

    fn mark_joined(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::web_sys;
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(JOINED_STORAGE_KEY, "true");
                }
            }
        }
    }
}

/// In-memory flag, shared between clones so a "reload" can be simulated by
/// building a second controller over the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(std::rc::Rc<std::cell::Cell<bool>>);

impl JoinedStore for MemoryStore {
    fn load(&self) -> bool {
        self.0.get()
    }

    fn mark_joined(&self) {
        self.0.set(true);
    }
}

/// The waitlist form state machine.
///
/// ```text
/// EDITABLE --(submit, validation fails)--> EDITABLE (+ inline error)
/// EDITABLE --(submit, validation passes)--> SUBMITTING
/// SUBMITTING --(backend resolves)--> SUCCESS (persisted, terminal)
/// SUBMITTING --(backend rejects)--> EDITABLE (+ inline error)
/// (restore, flag already set) --> SUCCESS
/// ```
///
/// At most one submission is in flight: `begin_submit` refuses to start
/// another while the phase is not `Editable`. The disabled submit button is
/// the UI reflection of the same invariant.
#[derive(Debug)]
pub struct WaitlistController<S: JoinedStore> {
    phase: FormPhase,
    store: S,
}

impl<S: JoinedStore> WaitlistController<S> {
    pub fn new(store: S) -> Self {
        Self {
            phase: FormPhase::Editable,
            store,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Load-time check: a previously persisted join renders the success
    /// panel directly, without re-running validation or submission.
    pub fn restore(&mut self) {
        if self.phase == FormPhase::Editable && self.store.load() {
            self.phase = FormPhase::Success;
        }
    }

    /// Validate input and, on success, enter the `Submitting` phase.
    ///
    /// Returns `None` when the form is not editable (a submission is
    /// already in flight, or the user has joined), `Some(Err)` on a
    /// validation failure (the form stays editable), and `Some(Ok)` with
    /// the record to hand to the backend.
    pub fn begin_submit(
        &mut self,
        input: &RawSignup,
    ) -> Option<Result<SubmissionRecord, ValidationError>> {
        if self.phase != FormPhase::Editable {
            return None;
        }
        match validate(input) {
            Ok(record) => {
                self.phase = FormPhase::Submitting;
                Some(Ok(record))
            }
            Err(err) => Some(Err(err)),
        }
    }

    /// Settle the in-flight submission. A resolved backend persists the
    /// joined flag and ends in `Success`; a rejection restores
    /// editability. Every path leaves `Submitting`.
    pub fn complete_submit(&mut self, outcome: Result<(), SubmissionError>) -> FormPhase {
        if self.phase == FormPhase::Submitting {
            match outcome {
                Ok(()) => {
                    self.store.mark_joined();
                    self.phase = FormPhase::Success;
                }
                Err(_) => self.phase = FormPhase::Editable,
            }
        }
        self.phase
    }
}

/// Transient inline-error slot with superseding semantics: a scheduled
/// auto-dismiss only clears the error it was issued for.
#[derive(Debug, Default)]
pub struct ErrorBanner {
    current: Option<String>,
    seq: u64,
}

impl ErrorBanner {
    /// Show a message, returning the token the matching dismiss must use.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(message.into());
        self.seq
    }

    /// Clear the banner, unless a newer message superseded `token`.
    pub fn dismiss(&mut self, token: u64) {
        if token == self.seq {
            self.current = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
