//! The seam every candidate filter plugs into.

use crate::types::{Candidate, UserContext};
use anyhow::Result;

/// A single step of candidate narrowing.
///
/// A filter consumes the candidate list and hands back the survivors, so
/// filters can be stacked in a `FilterPipeline` in any order.
pub trait Filter: Send + Sync {
    /// Short label used in pipeline logs
    fn name(&self) -> &str;

    /// Keep the candidates this filter accepts for `context.user_id`
    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Result<Vec<Candidate>>;
}
