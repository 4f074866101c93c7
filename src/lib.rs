// src/lib.rs

//! Async client for the Qualys SSL Labs assessment APIs.
//!
//! The entry point is [`Ssllabs`], which submits assessments while
//! respecting the service's advertised capacity limits and cool-off, and
//! polls each job until it reaches a terminal state. The per-operation
//! callers in [`api`] can also be used directly; the JSON shapes they
//! return live in [`data`].
//!
//! ```no_run
//! use ssllabs_client::{AnalyzeOptions, Ssllabs};
//!
//! # async fn run() -> ssllabs_client::Result<()> {
//! let ssllabs = Ssllabs::new();
//! if ssllabs.availability().await? {
//!     let host = ssllabs.analyze("example.com", AnalyzeOptions::default()).await?;
//!     println!("{}: {}", host.host, host.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The crate emits diagnostics through `tracing` and never installs a
//! subscriber of its own.

pub mod api;
pub mod client;
pub mod data;
pub mod error;
pub mod trust_store;

pub use client::{AnalyzeOptions, Ssllabs};
pub use error::{Error, Result};
pub use trust_store::TrustStore;
