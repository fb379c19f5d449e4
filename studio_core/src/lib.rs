//! # studio_core
//!
//! Everything behind the ATH Creative Studio landing page that has a
//! behavioral contract, kept free of browser APIs so it builds and tests
//! natively:
//!
//! - [`lead`] - the lead draft and its option sets
//! - [`validation`] - required-field and email checks
//! - [`payload`] - JSON body for the form relay
//! - [`form`] - idle / submitting / success state machine
//! - [`rotation`] - rotating headline and exclusive-choice groups
//! - [`content`] - copy and service catalog
//! - [`config`] - `site.toml` loading
//!
//! ```rust
//! use studio_core::form::{LeadForm, SubmitOutcome};
//!
//! let mut form = LeadForm::default();
//! form.set_project("sol.xyz");
//! form.set_email("a@b.com");
//!
//! let SubmitOutcome::Send(payload) = form.submit() else { unreachable!() };
//! assert!(payload.to_json().unwrap().contains(r#""timeline":"ASAP""#));
//! assert_eq!(form.submit(), SubmitOutcome::Ignored);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod lead;
pub mod payload;
pub mod rotation;
pub mod validation;

pub use config::SiteConfig;
pub use error::{ConfigError, ParseFieldError, TransmissionError};
pub use form::{FinishOutcome, FormPhase, LeadForm, SubmitOutcome};
pub use lead::{ContactChannel, DetailField, Goal, LeadDraft, Revenue, Timeline};
pub use payload::LeadPayload;
pub use rotation::{ExclusiveChoice, Rotator};
pub use validation::{Field, FieldErrors, ValidLead};
