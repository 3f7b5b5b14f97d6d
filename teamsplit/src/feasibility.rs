use serde::{Deserialize, Serialize};

use crate::{Player, Role};

/// How many attackers and defenders each team must field, besides its goalkeeper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetFormation {
    #[serde(rename = "ATT")]
    pub attackers: usize,
    #[serde(rename = "DEF")]
    pub defenders: usize,
}

impl TargetFormation {
    pub fn new(attackers: usize, defenders: usize) -> Self {
        Self {
            attackers,
            defenders,
        }
    }

    /// The number of field players this formation requires.
    pub fn total(self) -> usize {
        self.attackers + self.defenders
    }
}

impl std::fmt::Display for TargetFormation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ATT: {}, DEF: {}}}", self.attackers, self.defenders)
    }
}

/// Field player counts of one team, by role. Goalkeepers are not counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub attackers: usize,
    pub defenders: usize,
    pub flexible: usize,
}

impl RoleCounts {
    pub fn of<'a>(team: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut counts = Self::default();
        for player in team {
            match player.role {
                Role::Goalkeeper => {}
                Role::Attacker => counts.attackers += 1,
                Role::Defender => counts.defenders += 1,
                Role::Flexible => counts.flexible += 1,
            }
        }
        counts
    }

    pub fn field_players(self) -> usize {
        self.attackers + self.defenders + self.flexible
    }

    /// Whether the flexible players can be split so that the team plays
    /// exactly `target`. This only proves that such a split exists, see
    /// [`Lineup::assign()`](crate::Lineup::assign) for picking one.
    pub fn can_field(self, target: TargetFormation) -> bool {
        if self.field_players() != target.total() {
            return false;
        }

        let attackers_possible = (self.attackers..=self.attackers + self.flexible)
            .contains(&target.attackers);
        let defenders_possible = (self.defenders..=self.defenders + self.flexible)
            .contains(&target.defenders);

        // Each flexible player covers only one shortfall
        let flexible_needed = target.attackers.saturating_sub(self.attackers)
            + target.defenders.saturating_sub(self.defenders);

        attackers_possible && defenders_possible && flexible_needed <= self.flexible
    }
}

/// Checks if a team can field the target number of attackers and defenders,
/// using flexible players where needed. The goalkeeper is ignored.
pub fn is_viable<'a>(team: impl IntoIterator<Item = &'a Player>, target: TargetFormation) -> bool {
    RoleCounts::of(team).can_field(target)
}
