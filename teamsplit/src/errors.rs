use crate::TargetFormation;

/// The error type for [`Roster::new()`](crate::Roster::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidRoster {
    WrongGoalkeeperCount { count: usize },
    OddPlayerCount { count: usize },
    DuplicateName { name: String },
    /// The summed strength of all players does not fit in a `u32`.
    StrengthOverflow,
}

impl std::error::Error for InvalidRoster {}

impl std::fmt::Display for InvalidRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidRoster::WrongGoalkeeperCount { count } => write!(
                f,
                "Exactly two goalkeepers are required, but the roster has {}",
                count
            ),
            InvalidRoster::OddPlayerCount { count } => write!(
                f,
                "Odd number of players ({}), cannot make two equal teams",
                count
            ),
            InvalidRoster::DuplicateName { name } => {
                write!(f, "The name '{}' appears more than once in the roster", name)
            }
            InvalidRoster::StrengthOverflow => {
                write!(f, "The total strength of the roster is too large")
            }
        }
    }
}

/// Advisory returned by [`Roster::formation_mismatch()`](crate::Roster::formation_mismatch).
///
/// This is not an error: the search still runs, but every split will be
/// infeasible because no team has the right number of field players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormationMismatch {
    pub target: TargetFormation,
    pub field_players_per_team: usize,
}

impl std::fmt::Display for FormationMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Target formation {} requires {} field players, but teams have {} field players",
            self.target,
            self.target.total(),
            self.field_players_per_team
        )
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Role`](crate::Role).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleFromStrErr {
    pub input: String,
}

impl std::error::Error for RoleFromStrErr {}

impl std::fmt::Display for RoleFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown position '{}', expected one of GK, ATT, DEF, ATT/DEF",
            self.input
        )
    }
}
