use std::{cell::RefCell, fmt, rc::Rc, time::Duration};

use futures_util::future::{FutureExt, LocalBoxFuture};
use thiserror::Error;

use crate::telemetry::{log_event, LogLevel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The `name` attribute of the matching input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Email => "Enter your email address",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("a message is already being sent")]
    AlreadySubmitting,
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("no message is being sent")]
    NotSubmitting,
    #[error("message could not be delivered: {0}")]
    Delivery(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }

    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.field(*field).is_empty())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Moves `Idle -> Submitting` and returns what should be delivered.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }

        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        self.phase = SubmitPhase::Submitting;
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Moves `Submitting -> Idle`. Fields are cleared only when delivery
    /// succeeded.
    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) -> Result<(), ContactError> {
        if !self.is_submitting() {
            return Err(ContactError::NotSubmitting);
        }

        self.phase = SubmitPhase::Idle;
        outcome?;

        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        Ok(())
    }
}

const EMAIL_LOCAL_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_DOMAIN_LABEL: usize = 63;

/// The browser's `type=email` rule: `local@label(.label)*`, where each
/// domain label is alphanumeric with inner hyphens.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SYMBOLS.contains(c));

    local_ok && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    (1..=MAX_DOMAIN_LABEL).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

pub trait MessageSink {
    fn deliver(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), ContactError>>;
}

/// Stands in for a real mail or storage collaborator: waits, then succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedDelivery {
    pub delay: Duration,
}

impl SimulatedDelivery {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MessageSink for SimulatedDelivery {
    fn deliver(&self, _message: ContactMessage) -> LocalBoxFuture<'static, Result<(), ContactError>> {
        let delay = self.delay;
        async move {
            sleep(delay).await;
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Runs one full submission against `form`. `on_change` fires after every
/// state change so the view can redraw.
pub async fn run_submission(
    form: Rc<RefCell<ContactForm>>,
    sink: Rc<dyn MessageSink>,
    on_change: impl Fn(),
) -> Result<(), ContactError> {
    let started = form.borrow_mut().begin_submit();
    let message = match started {
        Ok(message) => message,
        Err(error) => {
            log_event(
                LogLevel::Debug,
                "contact_submit_rejected",
                serde_json::json!({ "reason": error.to_string() }),
            );
            return Err(error);
        }
    };

    log_event(
        LogLevel::Info,
        "contact_submit_started",
        serde_json::json!({ "subject_length": message.subject.chars().count() }),
    );
    on_change();

    let outcome = sink.deliver(message).await;
    let finished = form.borrow_mut().finish_submit(outcome);

    log_event(
        LogLevel::Info,
        "contact_submit_finished",
        serde_json::json!({
            "ok": finished.is_ok(),
            "error": finished.as_ref().err().map(ToString::to_string),
        }),
    );
    on_change();

    finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::Instant;

    fn jane() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Jane");
        form.set_field(ContactField::Email, "jane@x.com");
        form.set_field(ContactField::Subject, "Hi");
        form.set_field(ContactField::Message, "Hello");
        form
    }

    struct FailingSink;

    impl MessageSink for FailingSink {
        fn deliver(&self, _message: ContactMessage) -> LocalBoxFuture<'static, Result<(), ContactError>> {
            async { Err(ContactError::Delivery("mailbox unavailable".to_string())) }.boxed_local()
        }
    }

    #[test]
    fn begin_submit_snapshots_trimmed_fields() {
        let mut form = jane();
        form.set_field(ContactField::Subject, "  Hi  ");

        let message = form.begin_submit().expect("complete form should submit");

        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Sending...");
        assert_eq!(message.subject, "Hi");
        assert_eq!(message.email, "jane@x.com");
    }

    #[test]
    fn second_submit_while_sending_is_rejected_without_side_effects() {
        let mut form = jane();
        form.begin_submit().expect("first submit starts");
        let snapshot = form.clone();

        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert_eq!(form, snapshot);
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let mut form = jane();
        form.set_field(ContactField::Subject, "   ");
        form.set_field(ContactField::Message, "");

        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(
            ContactError::MissingField(ContactField::Subject).to_string(),
            "Subject is required"
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in [
            "jane",
            "@x.com",
            "jane@",
            "jane@.com",
            "jane@x..com",
            "jane@x.com.",
            "jane@-x.com",
            "ja ne@x.com",
            "a@b@c",
        ] {
            let mut form = jane();
            form.set_field(ContactField::Email, bad);
            assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn addresses_the_browser_accepts_pass() {
        for good in ["jane@x.com", "jane.doe+hi@mail.example-host.org", "jane@localhost"] {
            let mut form = jane();
            form.set_field(ContactField::Email, good);
            assert!(form.begin_submit().is_ok(), "{good}");
        }
    }

    #[test]
    fn successful_finish_clears_every_field() {
        let mut form = jane();
        form.begin_submit().expect("submit starts");

        assert_eq!(form.finish_submit(Ok(())), Ok(()));

        assert!(form.is_blank());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.submit_label(), "Send Message");
    }

    #[test]
    fn failed_finish_keeps_fields_for_retry() {
        let mut form = jane();
        form.begin_submit().expect("submit starts");

        let result = form.finish_submit(Err(ContactError::Delivery("offline".to_string())));

        assert!(result.is_err());
        assert!(!form.is_submitting());
        assert_eq!(form.field(ContactField::Name), "Jane");
    }

    #[test]
    fn finish_without_begin_is_an_error() {
        let mut form = jane();

        assert_eq!(form.finish_submit(Ok(())), Err(ContactError::NotSubmitting));
        assert_eq!(form.field(ContactField::Message), "Hello");
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submission_is_busy_for_the_delay_then_clears() {
        let form = Rc::new(RefCell::new(jane()));
        let sink: Rc<dyn MessageSink> = Rc::new(SimulatedDelivery::new(Duration::from_millis(2_000)));
        let changes = Rc::new(Cell::new(0));
        let started_at = Instant::now();

        let submission = run_submission(form.clone(), sink, {
            let changes = changes.clone();
            move || changes.set(changes.get() + 1)
        });
        let mut submission = Box::pin(submission);

        assert!(futures_util::poll!(submission.as_mut()).is_pending());
        assert!(form.borrow().is_submitting());
        assert_eq!(
            form.borrow_mut().begin_submit(),
            Err(ContactError::AlreadySubmitting)
        );
        assert_eq!(changes.get(), 1);

        let result = submission.await;

        assert_eq!(result, Ok(()));
        assert!(started_at.elapsed() >= Duration::from_millis(2_000));
        assert!(form.borrow().is_blank());
        assert!(!form.borrow().is_submitting());
        assert_eq!(changes.get(), 2);
    }

    #[tokio::test]
    async fn rejected_submission_does_not_notify() {
        let form = Rc::new(RefCell::new(ContactForm::default()));
        let sink: Rc<dyn MessageSink> = Rc::new(SimulatedDelivery::new(Duration::ZERO));
        let changes = Rc::new(Cell::new(0));

        let result = run_submission(form.clone(), sink, {
            let changes = changes.clone();
            move || changes.set(changes.get() + 1)
        })
        .await;

        assert_eq!(result, Err(ContactError::MissingField(ContactField::Name)));
        assert_eq!(changes.get(), 0);
    }

    #[tokio::test]
    async fn delivery_failure_keeps_fields_and_reenables_submit() {
        let form = Rc::new(RefCell::new(jane()));
        let sink: Rc<dyn MessageSink> = Rc::new(FailingSink);

        let result = run_submission(form.clone(), sink, || {}).await;

        assert!(matches!(result, Err(ContactError::Delivery(_))));
        assert!(!form.borrow().is_submitting());
        assert_eq!(form.borrow().field(ContactField::Email), "jane@x.com");
    }
}
