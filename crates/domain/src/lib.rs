//! # hostwatch-domain
//!
//! Pure domain model for the hostwatch monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Hosts** (machines registered with the backend, with SSH credentials)
//! - Define **Snapshots** (point-in-time metric bundles for every known host)
//! - Define the **API error kinds** and response classification shared by every client
//! - Local validation (IPv4 dotted-quad) and display formatting helpers
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser/IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod format;
pub mod host;
pub mod ip;
pub mod metrics;
pub mod probe;
