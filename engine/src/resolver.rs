use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{LotteryConfig, BPS_SCALE};
use crate::currency::{per_ticket_prize, Cents};
use crate::errors::LotteryError;
use crate::player::{Player, TicketId};
use crate::report::render_report;

/// One tier line for the results report: who won, how many of their tickets
/// won, and the tier total they collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningRecord {
    pub player_name: String,
    pub display_order: usize,
    pub winning_tickets: u32,
    pub prize_total: Cents,
}

/// Everything a round produces: the players with winnings credited, the new
/// cumulative house profit, the tier records, and the rendered report.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub players: Vec<Player>,
    pub house_profit: Cents,
    pub grand_winner: WinningRecord,
    pub second_winners: Vec<WinningRecord>,
    pub third_winners: Vec<WinningRecord>,
    pub report: String,
}

/// Number of winning tickets for a tier: half-up rounding of
/// `total × bps / 10000`. The draw caps it at the remaining pool.
fn tier_winner_count(total_tickets: usize, bps: u32) -> usize {
    ((total_tickets as u64 * u64::from(bps) + BPS_SCALE / 2) / BPS_SCALE) as usize
}

/// Revenue share for a tier, truncated to whole cents.
fn revenue_share(revenue: Cents, bps: u32) -> Cents {
    revenue * Cents::from(bps) / BPS_SCALE as Cents
}

fn tier_records(players: &[Player], winning: &HashSet<TicketId>, per_ticket: Cents) -> Vec<WinningRecord> {
    players
        .iter()
        .filter_map(|p| {
            let hits = p.tickets().iter().filter(|t| winning.contains(t)).count() as u32;
            (hits > 0).then(|| WinningRecord {
                player_name: p.name().to_string(),
                display_order: p.display_order(),
                winning_tickets: hits,
                prize_total: Cents::from(hits) * per_ticket,
            })
        })
        .collect()
}

/// Draws the three prize tiers for a round, credits winnings, and folds the
/// round's profit into the running house total. Takes the players by value
/// and returns the updated list in the outcome.
pub fn resolve_round<R: Rng>(
    mut players: Vec<Player>,
    house_profit: Cents,
    config: &LotteryConfig,
    rng: &mut R,
) -> Result<RoundOutcome, LotteryError> {
    // Distinct union of every player's tickets. Ids are unique by
    // construction; the dedupe is a safety net.
    let mut seen = HashSet::new();
    let pool: Vec<TicketId> = players
        .iter()
        .flat_map(|p| p.tickets().iter().copied())
        .filter(|t| seen.insert(*t))
        .collect();
    if pool.is_empty() {
        return Err(LotteryError::EmptyTicketPool);
    }

    let total_tickets = pool.len();
    let revenue = total_tickets as Cents * config.ticket_price;
    let second_count = tier_winner_count(total_tickets, config.second_tier_ticket_bps);
    let third_count = tier_winner_count(total_tickets, config.third_tier_ticket_bps);

    let grand_ticket = pool[rng.gen_range(0..total_tickets)];

    let mut remaining: Vec<TicketId> = pool.iter().copied().filter(|t| *t != grand_ticket).collect();
    remaining.shuffle(rng);
    let second_tickets: HashSet<TicketId> = remaining.iter().take(second_count).copied().collect();

    let mut rest: Vec<TicketId> = remaining
        .iter()
        .copied()
        .filter(|t| !second_tickets.contains(t))
        .collect();
    rest.shuffle(rng);
    let third_tickets: HashSet<TicketId> = rest.iter().take(third_count).copied().collect();

    let grand_prize = revenue_share(revenue, config.grand_prize_bps);
    let second_pool = if second_tickets.is_empty() { 0 } else { revenue_share(revenue, config.second_prize_bps) };
    let third_pool = if third_tickets.is_empty() { 0 } else { revenue_share(revenue, config.third_prize_bps) };
    let second_per_ticket = per_ticket_prize(second_pool, second_tickets.len());
    let third_per_ticket = per_ticket_prize(third_pool, third_tickets.len());

    let mut total_payout: Cents = 0;
    for player in players.iter_mut() {
        let winnings: Cents = player
            .tickets()
            .iter()
            .map(|t| {
                if *t == grand_ticket {
                    grand_prize
                } else if second_tickets.contains(t) {
                    second_per_ticket
                } else if third_tickets.contains(t) {
                    third_per_ticket
                } else {
                    0
                }
            })
            .sum();
        if winnings > 0 {
            player.credit(winnings);
        }
        total_payout += winnings;
    }

    let house_profit = house_profit + revenue - total_payout;

    let grand_set = HashSet::from([grand_ticket]);
    let grand_winner = tier_records(&players, &grand_set, grand_prize)
        .into_iter()
        .next()
        .ok_or(LotteryError::UnownedTicket)?;
    let mut second_winners = tier_records(&players, &second_tickets, second_per_ticket);
    let mut third_winners = tier_records(&players, &third_tickets, third_per_ticket);
    second_winners.sort_by_key(|r| r.display_order);
    third_winners.sort_by_key(|r| r.display_order);

    let report = render_report(&players, &grand_winner, &second_winners, &third_winners, house_profit);

    Ok(RoundOutcome {
        players,
        house_profit,
        grand_winner,
        second_winners,
        third_winners,
        report,
    })
}
