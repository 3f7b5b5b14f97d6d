use std::collections::HashSet;

use crate::{Player, TeamSplit};

/// Identifies a split regardless of which side is called A and which B.
///
/// Holds the sorted member names of both teams, the smaller list first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SplitKey([Vec<String>; 2]);

impl SplitKey {
    pub fn of(split: &TeamSplit) -> Self {
        let mut sides = [sorted_names(&split.team_a), sorted_names(&split.team_b)];
        sides.sort();
        Self(sides)
    }
}

fn sorted_names(team: &[Player]) -> Vec<String> {
    let mut names: Vec<String> = team.iter().map(|p| p.name.clone()).collect();
    names.sort();
    names
}

/// Keeps the feasible splits, best balanced first, without duplicates.
///
/// Ties on the strength difference are broken by team A's strength and then
/// by the member names, so the order is the same on every run.
pub fn rank(splits: Vec<TeamSplit>) -> Vec<TeamSplit> {
    let mut keyed: Vec<(SplitKey, TeamSplit)> = splits
        .into_iter()
        .filter(|split| split.feasible)
        .map(|split| (SplitKey::of(&split), split))
        .collect();
    keyed.sort_by(|(key_1, split_1), (key_2, split_2)| {
        (split_1.difference, split_1.strength_a, key_1).cmp(&(
            split_2.difference,
            split_2.strength_a,
            key_2,
        ))
    });
    dedup_keyed(keyed)
}

/// Removes every split whose [`SplitKey`] was already seen, keeping the first.
pub fn dedup(splits: Vec<TeamSplit>) -> Vec<TeamSplit> {
    dedup_keyed(
        splits
            .into_iter()
            .map(|split| (SplitKey::of(&split), split))
            .collect(),
    )
}

fn dedup_keyed(keyed: Vec<(SplitKey, TeamSplit)>) -> Vec<TeamSplit> {
    let mut seen = HashSet::new();
    keyed
        .into_iter()
        .filter_map(|(key, split)| seen.insert(key).then_some(split))
        .collect()
}
