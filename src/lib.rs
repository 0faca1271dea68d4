//! linkpost: LinkedIn Post Generation Client
//!
//! Generates post text and images through a backend service, falls back to built-in
//! demo data when the backend is unreachable, and publishes posts once or once a day
//! for a number of days.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod generation;
pub mod logging;
pub mod post;
pub mod schedule;
