//! Lifeguard Core - Shared types and view model.
//!
//! This crate provides the pieces used across all Lifeguard components:
//! - `webapp` - Server-rendered mini-app shown inside the Telegram client
//! - `cli` - Command-line client for the same gateway
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no caches. The gateway owns and aggregates every record; this
//! crate only describes those records, groups them for display and turns
//! form drafts into requests.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs and the closed enumerations (workout type,
//!   meal type, shopping category) with their display tables
//! - [`models`] - Gateway records, creation requests and summaries
//! - [`view`] - Grouping of flat lists into display buckets
//! - [`progress`] - Progress bars read from gateway summaries
//! - [`forms`] - Draft records and the draft-to-request omission rule
//! - [`query`] - Query keys and the mutation invalidation map
//! - [`platform`] - Frozen host context (theme, user identity)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod forms;
pub mod models;
pub mod platform;
pub mod progress;
pub mod query;
pub mod types;
pub mod view;

pub use types::*;
