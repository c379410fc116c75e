// Contact form: field state, submit lifecycle, outbound transport, and the
// receiving endpoint that implements the same request/response contract.

pub mod controller;
pub mod form;
pub mod handlers;
pub mod inbox;
pub mod status;
pub mod transport;

pub use controller::{SubmissionController, SUCCESS_RESET_DELAY};
pub use form::{ContactForm, FormField};
pub use inbox::ContactInbox;
pub use status::SubmissionStatus;
pub use transport::{ContactTransport, HttpContactTransport, SubmitError};

/// Path of the contact endpoint, relative to the site root.
pub const CONTACT_PATH: &str = "/api/contact";
