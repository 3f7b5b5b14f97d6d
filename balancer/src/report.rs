use teamsplit::{Player, TeamSplit};

/// Lists the players of a team by name, e.g. `Greg (6-DEF), Ste (8-GK)`.
pub fn format_team(team: &[Player]) -> String {
    let mut sorted: Vec<&Player> = team.iter().collect();
    sorted.sort_by(|p1, p2| p1.name.cmp(&p2.name));
    sorted
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// The text summary of the ranked splits.
///
/// `num_requested` is only used to tell the reader when fewer splits exist.
pub fn format_report(splits: &[TeamSplit], num_requested: usize) -> String {
    let mut result = String::new();
    for (idx, split) in splits.iter().enumerate() {
        // Splits arrive ranked and deduplicated, so position and rank agree
        result += &format!(
            "\n--- Split {} (Rank {} overall viable) ---\n",
            idx + 1,
            idx + 1
        );
        result += &format!("Strength Balance Difference: {}\n", split.difference);
        result += &format!(
            "\nTeam A (Strength: {}, Viable: {})\n  {}\n",
            split.strength_a,
            yes_no(split.feasible),
            format_team(&split.team_a)
        );
        result += &format!(
            "\nTeam B (Strength: {}, Viable: {})\n  {}\n",
            split.strength_b,
            yes_no(split.feasible),
            format_team(&split.team_b)
        );
        result += &"-".repeat(30);
        result += "\n";
    }

    if splits.is_empty() {
        result += "\nNo splits found that satisfy both balance and positional viability criteria.\n";
    } else if splits.len() < num_requested {
        result += &format!(
            "\nNote: Only {} unique balanced and viable configurations found.\n",
            splits.len()
        );
    }
    result
}
