//! # tfaudit
//!
//! Terraform Cloud audit-trail events in your terminal.
//!
//! The crate is a short pipeline run strictly in sequence:
//!
//! ```text
//! ┌───────────────┐   ┌────────────────┐   ┌──────────────────┐
//! │ since window  │ → │    Fetcher     │ → │      Viewer      │
//! │ (now - days)  │   │ GET + decode   │   │ scrollable table │
//! └───────────────┘   └────────────────┘   └──────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use chrono::Utc;
//!
//! let since = tfaudit::window::since_timestamp(Utc::now(), 1).expect("in range");
//! let envelope = tfaudit::fetch("my-org-token", &since)?;
//!
//! if !envelope.data.is_empty() {
//!     tfaudit::viewer::display(&envelope.data)?;
//! }
//! ```
//!
//! # Modules
//!
//! - [`model`] - audit event records as decoded from the API
//! - [`client`] - blocking audit-trail client
//! - [`window`] - `since` timestamp computation
//! - [`viewer`] - full-screen terminal table

pub mod client;
mod error;
pub mod model;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod viewer;
pub mod window;

pub use client::{AuditTrailClient, ClientConfig, DEFAULT_ENDPOINT, fetch};
pub use error::{FetchError, Result};
pub use model::{AuditEvent, Auth, Request, Resource, ResponseEnvelope};
