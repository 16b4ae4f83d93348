//! Core domain logic for checkreport
//!
//! This module contains pure aggregation and rendering logic with no I/O
//! dependencies. External collaborators are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (CheckState, CheckResult, AppResults)
//! - `services/` - Aggregate, renderer, footer, tracing decorator
//! - `ports/` - Trait definitions for markers and tracers

pub mod models;
pub mod ports;
pub mod services;
