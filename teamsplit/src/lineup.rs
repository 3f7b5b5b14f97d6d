use tracing::warn;

use crate::{Player, Role, TargetFormation};

/// A concrete assignment of one team's players to pitch positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lineup {
    pub goalkeepers: Vec<Player>,
    pub defenders: Vec<Player>,
    pub attackers: Vec<Player>,
}

impl Lineup {
    /// Puts every player of `team` into a slot, pure roles first.
    ///
    /// Stronger players are placed first. Flexible players fill the defence
    /// before the attack. For a team that passes
    /// [`is_viable()`](crate::is_viable) the result matches `target` exactly;
    /// otherwise whatever is left over is spread over the open slots.
    pub fn assign(team: &[Player], target: TargetFormation) -> Self {
        let mut lineup = Lineup::default();
        let mut field_players: Vec<&Player> = Vec::with_capacity(team.len());
        for player in team {
            if player.is_goalkeeper() {
                lineup.goalkeepers.push(player.clone());
            } else {
                field_players.push(player);
            }
        }
        // Stable, so equal strengths keep their team order
        field_players.sort_by(|p1, p2| p2.strength.cmp(&p1.strength));

        let mut assigned = vec![false; field_players.len()];
        let mut fill = |slots: &mut Vec<Player>, wanted: Option<Role>, limit: usize| {
            for (idx, player) in field_players.iter().enumerate() {
                if slots.len() >= limit {
                    break;
                }
                if !assigned[idx] && wanted.map_or(true, |role| player.role == role) {
                    slots.push((*player).clone());
                    assigned[idx] = true;
                }
            }
        };

        fill(&mut lineup.defenders, Some(Role::Defender), target.defenders);
        fill(&mut lineup.attackers, Some(Role::Attacker), target.attackers);
        fill(&mut lineup.defenders, Some(Role::Flexible), target.defenders);
        fill(&mut lineup.attackers, Some(Role::Flexible), target.attackers);

        if !lineup.matches(target) {
            let names: Vec<&str> = team.iter().map(|p| p.name.as_str()).collect();
            warn!(team = %names.join(", "), "Could not assign exact formation");
            fill(&mut lineup.defenders, None, target.defenders);
            fill(&mut lineup.attackers, None, target.attackers);
        }
        lineup
    }

    pub fn matches(&self, target: TargetFormation) -> bool {
        self.defenders.len() == target.defenders && self.attackers.len() == target.attackers
    }
}
