use rand::Rng;

use crate::config::LotteryConfig;
use crate::player::Player;

/// Buys a random number of tickets for each computer player that can afford
/// the minimum. The draw's upper bound is inclusive: a bot holding exactly
/// enough for the maximum can buy the maximum. Bots below the minimum
/// balance are left untouched.
pub fn assign_tickets<R: Rng>(players: &mut [Player], config: &LotteryConfig, rng: &mut R) {
    for player in players.iter_mut().filter(|p| !p.is_human()) {
        if player.balance() <= config.minimum_player_balance {
            continue;
        }
        let affordable = config.affordable_tickets(player.balance());
        if affordable < config.min_tickets_per_player {
            continue;
        }
        let count = rng.gen_range(config.min_tickets_per_player..=affordable);
        player.buy_tickets(count, config);
    }
}
