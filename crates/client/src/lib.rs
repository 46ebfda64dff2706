//! Submission side of the contact flow.
//!
//! [`ContactClient`] posts a [`ContactForm`] to the relay once per call and
//! turns the outcome into a [`Toast`] for the page to show.

mod client;
mod error;
mod form;
mod toast;

pub use client::*;
pub use error::*;
pub use form::*;
pub use toast::*;
