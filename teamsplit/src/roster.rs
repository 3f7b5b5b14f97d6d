use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FormationMismatch, InvalidRoster, RoleFromStrErr, TargetFormation};

/// The position category of a [player](Player).
///
/// Serialized as its [tag](Role::tag) and parsed through [`FromStr`], so
/// roster files accept the same spellings as `str::parse`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Goalkeeper,
    Attacker,
    Defender,
    /// May play as attacker or defender, never in goal.
    Flexible,
}

impl Role {
    pub fn tag(self) -> &'static str {
        match self {
            Role::Goalkeeper => "GK",
            Role::Attacker => "ATT",
            Role::Defender => "DEF",
            Role::Flexible => "ATT/DEF",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Role {
    type Err = RoleFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GK" => Ok(Role::Goalkeeper),
            "ATT" => Ok(Role::Attacker),
            "DEF" => Ok(Role::Defender),
            "ATT/DEF" | "DEF/ATT" => Ok(Role::Flexible),
            _ => Err(RoleFromStrErr {
                input: String::from(s),
            }),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = RoleFromStrErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> String {
        String::from(role.tag())
    }
}

/// A single player. Names identify players within a [`Roster`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub strength: u32,
    #[serde(rename = "position")]
    pub role: Role,
}

impl Player {
    pub fn new(name: &str, strength: u32, role: Role) -> Self {
        Self {
            name: String::from(name),
            strength,
            role,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.role == Role::Goalkeeper
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.strength, self.role)
    }
}

/// A validated, ordered list of players.
///
/// Guaranteed to contain exactly two goalkeepers, an even number of players,
/// no duplicate names and a total strength that fits in a `u32`. The first goalkeeper in roster order always plays
/// for team A, the second for team B.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: Vec<Player>,
    // Indices into `players`
    goalkeepers: [usize; 2],
}

/// Checks the shape of a roster without building one.
pub fn validate(players: &[Player]) -> Result<(), InvalidRoster> {
    let num_goalkeepers = players.iter().filter(|p| p.is_goalkeeper()).count();
    if num_goalkeepers != 2 {
        return Err(InvalidRoster::WrongGoalkeeperCount {
            count: num_goalkeepers,
        });
    }
    if players.len() % 2 != 0 {
        return Err(InvalidRoster::OddPlayerCount {
            count: players.len(),
        });
    }
    let mut seen = BTreeSet::new();
    for player in players {
        if !seen.insert(player.name.as_str()) {
            return Err(InvalidRoster::DuplicateName {
                name: player.name.clone(),
            });
        }
    }
    // Every team total is bounded by the roster total
    players
        .iter()
        .try_fold(0u32, |total, p| total.checked_add(p.strength))
        .ok_or(InvalidRoster::StrengthOverflow)?;
    Ok(())
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, InvalidRoster> {
        validate(&players)?;
        let mut goalkeepers = [0; 2];
        for (slot, (idx, _)) in players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_goalkeeper())
            .enumerate()
        {
            goalkeepers[slot] = idx;
        }
        Ok(Self {
            players,
            goalkeepers,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All non-goalkeepers, in roster order.
    pub fn field_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_goalkeeper()).collect()
    }

    /// The two goalkeepers in roster order: `[gk1, gk2]`.
    pub fn goalkeepers(&self) -> [&Player; 2] {
        [
            &self.players[self.goalkeepers[0]],
            &self.players[self.goalkeepers[1]],
        ]
    }

    pub fn team_size(&self) -> usize {
        self.players.len() / 2
    }

    pub fn field_players_per_team(&self) -> usize {
        self.team_size() - 1
    }

    /// Returns `Some` if the formation cannot be filled by teams of this roster's size.
    pub fn formation_mismatch(&self, target: TargetFormation) -> Option<FormationMismatch> {
        let field_players_per_team = self.field_players_per_team();
        if target.total() == field_players_per_team {
            None
        } else {
            Some(FormationMismatch {
                target,
                field_players_per_team,
            })
        }
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = InvalidRoster;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        Roster::new(players)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Vec<Player> {
        roster.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(roles: &[Role]) -> Vec<Player> {
        roles
            .iter()
            .enumerate()
            .map(|(idx, role)| Player::new(&format!("P{}", idx), 5, *role))
            .collect()
    }

    #[test]
    fn goalkeepers_keep_roster_order() {
        let roster = Roster::new(vec![
            Player::new("Weste", 6, Role::Flexible),
            Player::new("Ste", 8, Role::Goalkeeper),
            Player::new("Osmi", 4, Role::Attacker),
            Player::new("Leo", 8, Role::Goalkeeper),
        ])
        .unwrap();
        let [gk1, gk2] = roster.goalkeepers();
        assert_eq!(gk1.name, "Ste");
        assert_eq!(gk2.name, "Leo");
        let field: Vec<&str> = roster
            .field_players()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(field, vec!["Weste", "Osmi"]);
        assert_eq!(roster.team_size(), 2);
        assert_eq!(roster.field_players_per_team(), 1);
    }

    #[test]
    fn wrong_goalkeeper_count() {
        let zero = players(&[Role::Attacker, Role::Defender]);
        assert_eq!(
            Roster::new(zero),
            Err(InvalidRoster::WrongGoalkeeperCount { count: 0 })
        );
        let three = players(&[
            Role::Goalkeeper,
            Role::Goalkeeper,
            Role::Goalkeeper,
            Role::Attacker,
        ]);
        assert_eq!(
            Roster::new(three),
            Err(InvalidRoster::WrongGoalkeeperCount { count: 3 })
        );
    }

    #[test]
    fn odd_player_count() {
        let odd = players(&[Role::Goalkeeper, Role::Goalkeeper, Role::Flexible]);
        assert_eq!(
            Roster::new(odd),
            Err(InvalidRoster::OddPlayerCount { count: 3 })
        );
    }

    #[test]
    fn duplicate_names() {
        let mut dup = players(&[
            Role::Goalkeeper,
            Role::Goalkeeper,
            Role::Attacker,
            Role::Defender,
        ]);
        dup[3].name = String::from("P2");
        assert_eq!(
            validate(&dup),
            Err(InvalidRoster::DuplicateName {
                name: String::from("P2")
            })
        );
    }

    #[test]
    fn total_strength_must_fit() {
        let huge = vec![
            Player::new("GK1", u32::MAX, Role::Goalkeeper),
            Player::new("GK2", 0, Role::Goalkeeper),
            Player::new("A", 1, Role::Attacker),
            Player::new("B", 1, Role::Attacker),
        ];
        assert_eq!(Roster::new(huge), Err(InvalidRoster::StrengthOverflow));

        let at_limit = vec![
            Player::new("GK1", u32::MAX - 1, Role::Goalkeeper),
            Player::new("GK2", 0, Role::Goalkeeper),
            Player::new("A", 1, Role::Attacker),
            Player::new("B", 0, Role::Attacker),
        ];
        let roster = Roster::new(at_limit).unwrap();
        let splits = crate::enumerate(&roster, TargetFormation::new(1, 0));
        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].strength_a, u32::MAX);
        assert_eq!(splits[0].difference, u32::MAX);
    }

    #[test]
    fn role_from_str() {
        assert_eq!("gk".parse::<Role>(), Ok(Role::Goalkeeper));
        assert_eq!("ATT/DEF".parse::<Role>(), Ok(Role::Flexible));
        assert!("MID".parse::<Role>().is_err());
    }

    #[test]
    fn role_serde_uses_from_str() {
        let roles: Vec<Role> = serde_json::from_str(r#"["gk", "DEF/ATT", " att "]"#).unwrap();
        assert_eq!(roles, vec![Role::Goalkeeper, Role::Flexible, Role::Attacker]);
        let err = serde_json::from_str::<Role>(r#""MID""#).unwrap_err();
        assert!(err.to_string().contains("Unknown position 'MID'"));
        assert_eq!(
            serde_json::to_string(&Role::Flexible).unwrap(),
            r#""ATT/DEF""#
        );
    }

    #[test]
    fn deserialize_validates() {
        let ok = r#"[
            {"name": "Ste", "strength": 8, "position": "GK"},
            {"name": "Leo", "strength": 8, "position": "GK"},
            {"name": "Giano", "strength": 6, "position": "ATT/DEF"},
            {"name": "Greg", "strength": 6, "position": "DEF"}
        ]"#;
        let roster: Roster = serde_json::from_str(ok).unwrap();
        assert_eq!(roster.players()[2].role, Role::Flexible);

        let one_keeper = r#"[
            {"name": "Ste", "strength": 8, "position": "GK"},
            {"name": "Greg", "strength": 6, "position": "DEF"}
        ]"#;
        assert!(serde_json::from_str::<Roster>(one_keeper).is_err());
    }

    #[test]
    fn formation_mismatch() {
        let roster = Roster::new(players(&[
            Role::Goalkeeper,
            Role::Goalkeeper,
            Role::Attacker,
            Role::Defender,
            Role::Flexible,
            Role::Flexible,
        ]))
        .unwrap();
        assert_eq!(
            roster.formation_mismatch(TargetFormation::new(1, 1)),
            None
        );
        assert_eq!(
            roster.formation_mismatch(TargetFormation::new(3, 3)),
            Some(FormationMismatch {
                target: TargetFormation::new(3, 3),
                field_players_per_team: 2,
            })
        );
    }
}
