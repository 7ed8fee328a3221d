use std::fmt::Write as _;

use crate::currency::{format_cents, Cents};
use crate::player::Player;
use crate::resolver::WinningRecord;

/// Renders the round results. Pure function of its inputs: rendering the
/// same outcome twice yields byte-identical text. Label wording and line
/// order are a compatibility surface and must not change.
pub fn render_report(
    players: &[Player],
    grand_winner: &WinningRecord,
    second_winners: &[WinningRecord],
    third_winners: &[WinningRecord],
    house_profit: Cents,
) -> String {
    let mut out = String::new();

    let mut roster: Vec<&Player> = players.iter().collect();
    roster.sort_by_key(|p| p.display_order());

    let _ = writeln!(out, "--- Players and number of ticket(s) purchased ---");
    for p in roster {
        let _ = writeln!(out, "{} - Purchased Tickets: {}", p.name(), p.ticket_count());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Winners and Prizes ---");
    let _ = writeln!(out, "Grand Prize Winner: {}", winner_line(grand_winner));
    for r in second_winners {
        let _ = writeln!(out, "Second Prize Winners: {}", winner_line(r));
    }
    for r in third_winners {
        let _ = writeln!(out, "Third Prize Winner: {}", winner_line(r));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total House Revenue: ${}", format_cents(house_profit));
    out
}

fn winner_line(r: &WinningRecord) -> String {
    format!(
        "{} (Number of Winning Tickets {}, Prize Total: ${})",
        r.player_name,
        r.winning_tickets,
        format_cents(r.prize_total)
    )
}
