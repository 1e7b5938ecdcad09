// ============================================================================
// Contact Submission Validator
// ============================================================================
//
// Screens contact-form submissions and relays accepted ones to the email
// collaborator. Checks run in a fixed order, cheapest first:
//
//   honeypot -> timing -> bot score (network, optional) -> denylist
//            -> field validation -> dispatch (network)
//
// Every submission is evaluated once and dropped; nothing is retained
// between requests.
//
// ============================================================================

pub mod checks;
mod pipeline;
mod rejection;
mod submission;

pub use pipeline::ContactPipeline;
pub use rejection::Rejection;
pub use submission::{ContactForm, Submission};
