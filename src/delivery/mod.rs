//! Delivery to the recipient daemon
//!
//! One short-lived TCP exchange per alert: connect, write the request, read
//! the reply until the daemon goes quiet, classify it.

mod client;
mod reply;

pub use client::{DeliveryClient, DeliveryOutcome, CONNECT_TIMEOUT, READ_TIMEOUT};
pub use reply::{classify_reply, ReplyClass};
