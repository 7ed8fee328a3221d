use std::io::{BufRead, Write};
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lotto_engine::allocator::assign_tickets;
use lotto_engine::config::LotteryConfig;
use lotto_engine::currency::Cents;
use lotto_engine::errors::LotteryError;
use lotto_engine::logger::{Purchase, RoundLogger, RoundRecord};
use lotto_engine::player::{generate_players, human, human_mut, reset_round};
use lotto_engine::resolver::{resolve_round, RoundOutcome};

use crate::ui;

#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    pub seed: Option<u64>,
    pub log: Option<PathBuf>,
    /// Maximum rounds to play; `None` runs until the human is broke.
    pub rounds: Option<u32>,
    /// Play the human automatically (maximum affordable purchase each round).
    pub auto: bool,
}

enum Purchased {
    Tickets(u32),
    Quit,
}

/// Runs the round loop: purchase, allocation, draw, report, until the human
/// cannot afford a single ticket or the round limit is reached.
pub fn play(
    config: &LotteryConfig,
    opts: &GameOptions,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let mut rng = match opts.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut logger = match &opts.log {
        Some(path) => match RoundLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                let _ = ui::write_error(err, &format!("cannot open round log: {}", e));
                return 1;
            }
        },
        None => None,
    };

    let mut players = generate_players(config, &mut rng);
    let Some(name) = human(&players).map(|p| p.name().to_string()) else {
        let _ = ui::write_error(err, &LotteryError::NoHumanPlayer.to_string());
        return 1;
    };
    let _ = ui::welcome(out, &name);

    let mut house_profit: Cents = 0;
    let mut rounds_played: u32 = 0;

    loop {
        if opts.rounds.is_some_and(|limit| rounds_played >= limit) {
            break;
        }
        let balance = match human(&players) {
            Some(p) if p.balance() >= config.ticket_price => p.balance(),
            _ => break,
        };
        let affordable = config.affordable_tickets(balance);
        let _ = ui::show_balance(out, balance, affordable);

        let count = if opts.auto {
            affordable
        } else {
            match read_purchase(config, affordable, input, out) {
                Purchased::Tickets(n) => n,
                Purchased::Quit => break,
            }
        };
        let _ = ui::tickets_purchased(out, count);

        reset_round(&mut players);
        if let Some(p) = human_mut(&mut players) {
            p.buy_tickets(count, config);
        }
        assign_tickets(&mut players, config, &mut rng);

        let outcome = match resolve_round(std::mem::take(&mut players), house_profit, config, &mut rng) {
            Ok(o) => o,
            Err(e) => {
                let _ = ui::write_error(err, &e.to_string());
                return 1;
            }
        };
        let _ = ui::display_results(out, &outcome.report);

        if let Some(logger) = &mut logger {
            let record = round_record(logger, &outcome, opts.seed);
            if let Err(e) = logger.write(&record) {
                let _ = ui::write_error(err, &format!("cannot write round log: {}", e));
                return 1;
            }
        }

        players = outcome.players;
        house_profit = outcome.house_profit;
        rounds_played += 1;
    }

    if let Some(p) = human(&players) {
        let _ = ui::game_over(out, p.balance());
    }
    0
}

/// Prompts until a usable ticket count arrives. Blank or non-numeric input
/// is re-prompted; requests above the per-player maximum or the balance are
/// clamped with a notice. EOF quits the game.
fn read_purchase(
    config: &LotteryConfig,
    affordable: u32,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Purchased {
    loop {
        let _ = ui::prompt_ticket_count(out);
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return Purchased::Quit,
            Ok(_) => {}
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            let _ = ui::invalid_input(out);
            continue;
        }
        let Ok(mut requested) = trimmed.parse::<u32>() else {
            let _ = ui::invalid_input(out);
            continue;
        };
        if requested < config.min_tickets_per_player {
            let _ = ui::below_minimum(out, config.min_tickets_per_player);
            continue;
        }
        if requested > config.max_tickets_per_player {
            let _ = ui::clamped_to_maximum(out, config.max_tickets_per_player);
            requested = config.max_tickets_per_player;
        }
        if requested > affordable {
            let _ = ui::clamped_to_balance(out, affordable);
            requested = affordable;
        }
        return Purchased::Tickets(requested);
    }
}

fn round_record(logger: &mut RoundLogger, outcome: &RoundOutcome, seed: Option<u64>) -> RoundRecord {
    RoundRecord {
        round_id: logger.next_id(),
        seed,
        purchases: outcome
            .players
            .iter()
            .map(|p| Purchase {
                name: p.name().to_string(),
                tickets: p.ticket_count(),
            })
            .collect(),
        grand_winner: outcome.grand_winner.player_name.clone(),
        second_winners: outcome
            .second_winners
            .iter()
            .map(|r| r.player_name.clone())
            .collect(),
        third_winners: outcome
            .third_winners
            .iter()
            .map(|r| r.player_name.clone())
            .collect(),
        house_profit: outcome.house_profit,
        ts: None,
    }
}
