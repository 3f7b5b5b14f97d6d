use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use teamsplit::{Roster, TargetFormation};

/// The contents of a roster JSON file.
#[derive(Clone, Debug, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_formation")]
    pub formation: TargetFormation,
    pub players: Roster,
}

fn default_formation() -> TargetFormation {
    TargetFormation::new(3, 3)
}

impl RosterConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open roster file '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse roster file '{}'", path.display()))
    }

    /// Replaces the counts that were given on the command line.
    pub fn with_overrides(mut self, attackers: Option<usize>, defenders: Option<usize>) -> Self {
        if let Some(attackers) = attackers {
            self.formation.attackers = attackers;
        }
        if let Some(defenders) = defenders {
            self.formation.defenders = defenders;
        }
        self
    }
}
