//! Trendboard - a terminal dashboard for the trend automation backend
//!
//! Collect trends, pick the interesting ones, generate platform content for
//! them and queue it for publishing, all against the backend's REST API.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod backend;
pub mod cli;
pub mod error;
pub mod input;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
