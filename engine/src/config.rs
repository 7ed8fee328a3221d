use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::errors::LotteryError;

/// Scale for basis-point shares: 10_000 bps = 100%.
pub const BPS_SCALE: u64 = 10_000;

/// Game constants. Amounts are cents, shares are basis points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotteryConfig {
    pub min_players: usize,
    pub max_players: usize,
    pub starting_balance: Cents,
    pub ticket_price: Cents,
    pub min_tickets_per_player: u32,
    pub max_tickets_per_player: u32,
    pub minimum_player_balance: Cents,
    pub grand_prize_bps: u32,
    pub second_prize_bps: u32,
    pub third_prize_bps: u32,
    pub second_tier_ticket_bps: u32,
    pub third_tier_ticket_bps: u32,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            min_players: 10,
            max_players: 15,
            starting_balance: 1_000,
            ticket_price: 100,
            min_tickets_per_player: 1,
            max_tickets_per_player: 10,
            minimum_player_balance: 0,
            grand_prize_bps: 5_000,
            second_prize_bps: 3_000,
            third_prize_bps: 1_000,
            second_tier_ticket_bps: 1_000,
            third_tier_ticket_bps: 1_000,
        }
    }
}

impl LotteryConfig {
    pub fn validate(&self) -> Result<(), LotteryError> {
        if self.ticket_price <= 0 {
            return Err(LotteryError::InvalidConfig(
                "ticket_price must be > 0".into(),
            ));
        }
        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(LotteryError::InvalidConfig(
                "player bounds must satisfy 1 <= min_players <= max_players".into(),
            ));
        }
        if self.min_tickets_per_player == 0
            || self.min_tickets_per_player > self.max_tickets_per_player
        {
            return Err(LotteryError::InvalidConfig(
                "ticket bounds must satisfy 1 <= min_tickets <= max_tickets".into(),
            ));
        }
        let shares =
            u64::from(self.grand_prize_bps) + u64::from(self.second_prize_bps) + u64::from(self.third_prize_bps);
        if shares > BPS_SCALE {
            return Err(LotteryError::InvalidConfig(
                "prize shares must not exceed 10000 bps".into(),
            ));
        }
        Ok(())
    }

    /// Largest ticket count `balance` can pay for, capped at the per-player maximum.
    pub fn affordable_tickets(&self, balance: Cents) -> u32 {
        let by_balance = (balance / self.ticket_price).max(0) as u32;
        by_balance.min(self.max_tickets_per_player)
    }
}
