use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LotteryError {
    #[error("Cannot draw winners from an empty ticket pool")]
    EmptyTicketPool,
    #[error("Winning ticket is not owned by any player")]
    UnownedTicket,
    #[error("No human player in the roster")]
    NoHumanPlayer,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
