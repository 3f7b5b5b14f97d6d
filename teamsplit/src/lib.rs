pub use enumerate::*;
pub use errors::*;
pub use feasibility::*;
pub use lineup::*;
pub use rank::*;
pub use roster::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod enumerate;
mod errors;
mod feasibility;
mod lineup;
mod rank;
mod roster;
mod visualization;

use tracing::{debug, warn};

/// Runs the whole search and returns at most `n` ranked, deduplicated splits.
///
/// An empty result means that no split is both balanced and positionally viable.
pub fn best_splits(roster: &Roster, target: TargetFormation, n: usize) -> Vec<TeamSplit> {
    if let Some(mismatch) = roster.formation_mismatch(target) {
        warn!("{}", mismatch);
    }
    let splits = enumerate(roster, target);
    let num_enumerated = splits.len();
    let mut ranked = rank(splits);
    debug!(num_enumerated, num_ranked = ranked.len(), "Search finished");
    ranked.truncate(n);
    ranked
}
