//! Core building blocks shared by every endpoint module:
//! - The [`DashClient`] and its builder.
//! - The [`DashError`] type.
//! - Shared data models ([`PriceBar`], [`DerivedSeries`]).
//! - Wire helpers for the provider's `{raw, fmt}` numeric encoding.

pub mod client;
pub mod error;
pub mod models;
pub(crate) mod net;
pub(crate) mod wire;

pub use client::{DashClient, DashClientBuilder};
pub use error::DashError;
pub use models::{DerivedSeries, PriceBar};
