//! Change planning interface
//!
//! The diff between a provider's current records and a desired zone is
//! computed outside this workspace. The engine only consumes its output.

use crate::plan::Change;
use crate::zone::Zone;

/// Computes the ordered changes that turn `existing` into `desired`
///
/// Implementations decide ordering; providers apply the returned changes
/// exactly in sequence.
pub trait Planner: Send + Sync {
    /// Compute the changes needed to reconcile `existing` with `desired`
    fn plan(&self, existing: &Zone, desired: &Zone) -> Vec<Change>;
}
