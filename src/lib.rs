//! Core domain model for the ConferenceHub conference-management site.
//!
//! Everything here is process-local state: registries seeded with mock data,
//! pure validation and status transitions, and a countdown ticker. There is
//! no transport, no persistence, and no rendering — those live behind the
//! small trait seams in [`ui`].

pub mod audit;
pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod seed;
pub mod ticker;
pub mod ui;
