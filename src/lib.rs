//! Interactive, in-memory poll manager.
//!
//! A [`registry::PollRegistry`] owns every poll created during a run and
//! routes operations to the most recent one. [`handlers::Session`] drives it
//! from a numbered console menu.

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod voting;

pub use error::{PollError, Result};
