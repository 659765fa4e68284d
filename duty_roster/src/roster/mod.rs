//! Roster subsystem.
//!
//! This module groups the TOML roster file model, its normalization rules,
//! and the machinery that synchronizes the file into the `personnel` table.
//! See [`crate::roster::config`] for the file model and helpers and
//! [`crate::roster::sync`] for the desired-vs-current sync.

pub mod config;
pub mod repo;
pub mod sync;
