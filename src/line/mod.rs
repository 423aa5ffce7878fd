pub mod client;
pub mod events;
pub mod signature;

pub use client::{LineClient, ReplySink};
pub use events::{WebhookBody, WebhookEvent};
pub use signature::{verify_signature, SignatureError, SIGNATURE_HEADER};
