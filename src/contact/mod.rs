//! Contact page: lead-capture form, its validation and its submission.
//!
//! - `form`: form data, field names and the live form state
//! - `messages`: per-field validation messages from the string provider
//! - `schema`: declarative field rules and whole-form validation
//! - `submission`: the Idle/Submitting/Success/Error state machine
//! - `transport`: where a validated form is delivered
//! - `channels`: static contact and social links shown next to the form

pub mod channels;
pub mod form;
pub mod messages;
pub mod schema;
pub mod submission;
pub mod transport;

pub use form::{ContactField, ContactForm, ContactFormData, SubjectOption, MESSAGE_MAX_CHARS};
pub use messages::ValidationMessages;
pub use schema::{ContactSchema, ValidationOutcome};
pub use submission::{SubmissionController, SubmissionState, SubmitRejected, STATUS_RESET_DELAY};
pub use transport::{
    ContactTransport, SimulatedTransport, SiteTransport, TransportError, WebhookTransport,
};
