use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LotteryConfig;
use crate::currency::Cents;

/// Identifier of one ticket for one round. Minted fresh on purchase and
/// owned by exactly one player until the round is reset.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TicketId(Uuid);

impl TicketId {
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: Uuid,
    name: String,
    is_human: bool,
    balance: Cents,
    tickets: Vec<TicketId>,
    display_order: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, is_human: bool, balance: Cents, display_order: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_human,
            balance,
            tickets: Vec::new(),
            display_order,
        }
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn is_human(&self) -> bool { self.is_human }
    pub fn balance(&self) -> Cents { self.balance }
    pub fn tickets(&self) -> &[TicketId] { &self.tickets }
    pub fn ticket_count(&self) -> u32 { self.tickets.len() as u32 }
    pub fn display_order(&self) -> usize { self.display_order }

    pub fn credit(&mut self, amount: Cents) {
        self.balance += amount;
    }

    /// Mints `count` fresh tickets and debits their cost. Callers clamp
    /// `count` to what the balance affords before calling.
    pub fn buy_tickets(&mut self, count: u32, config: &LotteryConfig) {
        self.balance -= Cents::from(count) * config.ticket_price;
        self.tickets.extend((0..count).map(|_| TicketId::mint()));
    }

    pub fn clear_tickets(&mut self) {
        self.tickets.clear();
    }
}

/// Generates a fresh roster: a random headcount within the configured
/// bounds, the human seated first, everyone at the starting balance.
pub fn generate_players<R: Rng>(config: &LotteryConfig, rng: &mut R) -> Vec<Player> {
    let headcount = rng.gen_range(config.min_players..=config.max_players);
    (0..headcount)
        .map(|i| {
            let name = if i == 0 {
                "Player 1 (Human)".to_string()
            } else {
                format!("Player {}", i + 1)
            };
            Player::new(name, i == 0, config.starting_balance, i)
        })
        .collect()
}

pub fn human(players: &[Player]) -> Option<&Player> {
    players.iter().find(|p| p.is_human())
}

pub fn human_mut(players: &mut [Player]) -> Option<&mut Player> {
    players.iter_mut().find(|p| p.is_human())
}

/// Discards every player's tickets ahead of a new round. Balances carry over.
pub fn reset_round(players: &mut [Player]) {
    for p in players.iter_mut() {
        p.clear_tickets();
    }
}
