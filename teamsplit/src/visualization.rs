use crate::{Lineup, Player, TeamSplit};

const MIN_PITCH_WIDTH: usize = 44;
const TEAM_A_MARKER: char = '●';
const TEAM_B_MARKER: char = '■';

fn player_cell(marker: char, player: &Player) -> String {
    let first_name = player.name.split_whitespace().next().unwrap_or("");
    format!("{}{}({})", marker, first_name, player.strength)
}

fn row(marker: char, players: &[Player]) -> String {
    players
        .iter()
        .map(|p| player_cell(marker, p))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Draws both lineups on a pitch, team B at the top and team A at the bottom.
pub fn visualize_pitch(split: &TeamSplit, lineup_a: &Lineup, lineup_b: &Lineup) -> String {
    let rows_b = [
        row(TEAM_B_MARKER, &lineup_b.goalkeepers),
        row(TEAM_B_MARKER, &lineup_b.defenders),
        row(TEAM_B_MARKER, &lineup_b.attackers),
    ];
    let rows_a = [
        row(TEAM_A_MARKER, &lineup_a.attackers),
        row(TEAM_A_MARKER, &lineup_a.defenders),
        row(TEAM_A_MARKER, &lineup_a.goalkeepers),
    ];
    let width = rows_a
        .iter()
        .chain(rows_b.iter())
        .map(|r| r.chars().count() + 4)
        .max()
        .unwrap_or(0)
        .max(MIN_PITCH_WIDTH);

    let mut result = format!(
        "Best Balanced Teams (Diff: {})\nTeam A (Str: {}) vs Team B (Str: {})\n{} Team A   {} Team B\n",
        split.difference, split.strength_a, split.strength_b, TEAM_A_MARKER, TEAM_B_MARKER
    );
    // Draw the top of the box
    result += &format!("╭{}╮\n", "─".repeat(width));
    for r in &rows_b {
        result += &format!("│{:^width$}│\n", r, width = width);
    }
    result += &format!("├{}┤\n", "┄".repeat(width));
    for r in &rows_a {
        result += &format!("│{:^width$}│\n", r, width = width);
    }
    // Draw the bottom of the box
    result += &format!("╰{}╯", "─".repeat(width));
    result
}
