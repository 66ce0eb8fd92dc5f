//! Core traits for zone synchronization
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`ZoneProvider`]: Read and reconcile a zone on a DNS provider
//! - [`Planner`]: Compute the changes between two zone states

pub mod zone_provider;
pub mod planner;

pub use zone_provider::{ZoneProvider, ZoneProviderFactory};
pub use planner::Planner;
