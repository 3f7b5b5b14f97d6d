use itertools::Itertools;
use serde::Serialize;

use crate::{is_viable, Player, Roster, TargetFormation};

/// One candidate partition of the roster into team A and team B.
///
/// Team A always holds the first goalkeeper of the roster and team B the second.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamSplit {
    /// Goalkeeper first, then field players in roster order.
    pub team_a: Vec<Player>,
    /// Goalkeeper first, then field players in roster order.
    pub team_b: Vec<Player>,
    pub strength_a: u32,
    pub strength_b: u32,
    pub difference: u32,
    /// Both teams can field the target formation.
    pub feasible: bool,
}

impl TeamSplit {
    fn new(team_a: Vec<Player>, team_b: Vec<Player>, target: TargetFormation) -> Self {
        let strength_a = team_strength(&team_a);
        let strength_b = team_strength(&team_b);
        let feasible = is_viable(&team_a, target) && is_viable(&team_b, target);
        Self {
            team_a,
            team_b,
            strength_a,
            strength_b,
            difference: strength_a.abs_diff(strength_b),
            feasible,
        }
    }
}

pub fn team_strength(team: &[Player]) -> u32 {
    team.iter().map(|p| p.strength).sum()
}

/// Produces one split per way of choosing team A's field players, i.e.
/// C(n, k) splits for n field players and k field players per team.
///
/// Every split is returned, feasible or not.
pub fn enumerate(roster: &Roster, target: TargetFormation) -> Vec<TeamSplit> {
    let [gk1, gk2] = roster.goalkeepers();
    let field_players = roster.field_players();
    let k = roster.field_players_per_team();

    (0..field_players.len())
        .combinations(k)
        .map(|chosen| {
            let mut team_a = Vec::with_capacity(k + 1);
            let mut team_b = Vec::with_capacity(field_players.len() - k + 1);
            team_a.push(gk1.clone());
            team_b.push(gk2.clone());
            // `chosen` is sorted, so one pass separates the two sides
            let mut chosen = chosen.into_iter().peekable();
            for (idx, player) in field_players.iter().enumerate() {
                if chosen.next_if_eq(&idx).is_some() {
                    team_a.push((*player).clone());
                } else {
                    team_b.push((*player).clone());
                }
            }
            TeamSplit::new(team_a, team_b, target)
        })
        .collect()
}
