use quickcheck::{Arbitrary, Gen};

use crate::{Player, Role, Roster, TargetFormation};

/// A valid roster with up to eight field players, and a formation that fits it.
#[derive(Clone, Debug)]
pub struct RosterInput {
    pub roster: Roster,
    pub target: TargetFormation,
}

impl Arbitrary for RosterInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 5;

        let mut players: Vec<Player> = (0..2 * k)
            .map(|idx| {
                let role = *g
                    .choose(&[Role::Attacker, Role::Defender, Role::Flexible])
                    .unwrap();
                Player::new(&format!("P{}", idx), u32::arbitrary(g) % 10, role)
            })
            .collect();
        for name in ["GK1", "GK2"] {
            let pos = usize::arbitrary(g) % (players.len() + 1);
            players.insert(pos, Player::new(name, u32::arbitrary(g) % 10, Role::Goalkeeper));
        }

        let attackers = usize::arbitrary(g) % (k + 1);
        RosterInput {
            roster: Roster::new(players).unwrap(),
            target: TargetFormation::new(attackers, k - attackers),
        }
    }
}

/// Number of ways to choose `k` out of `n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[test]
fn binomial_small_values() {
    assert_eq!(binomial(4, 2), 6);
    assert_eq!(binomial(8, 4), 70);
    assert_eq!(binomial(12, 6), 924);
    assert_eq!(binomial(0, 0), 1);
}
