use std::io::Write;

use lotto_engine::currency::{format_cents, Cents};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn welcome(out: &mut dyn Write, player_name: &str) -> std::io::Result<()> {
    writeln!(out, "Welcome to the Lottery App, {}.", player_name)
}

pub fn show_balance(out: &mut dyn Write, balance: Cents, affordable: u32) -> std::io::Result<()> {
    writeln!(
        out,
        "Your current balance is ${}, you can buy {} ticket(s).",
        format_cents(balance),
        affordable
    )
}

pub fn prompt_ticket_count(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Select number of tickets to purchase...")
}

pub fn invalid_input(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Invalid input. Please try again.")
}

pub fn below_minimum(out: &mut dyn Write, minimum: u32) -> std::io::Result<()> {
    writeln!(
        out,
        "Minimum number of tickets per player is {}. Please try again.",
        minimum
    )
}

pub fn clamped_to_maximum(out: &mut dyn Write, maximum: u32) -> std::io::Result<()> {
    writeln!(
        out,
        "Maximum number of tickets per player is {}, you have purchased {} ticket(s)",
        maximum, maximum
    )
}

pub fn clamped_to_balance(out: &mut dyn Write, allowed: u32) -> std::io::Result<()> {
    writeln!(
        out,
        "Your balance only allows you to buy {} ticket(s), you have purchased {} ticket(s)",
        allowed, allowed
    )
}

pub fn tickets_purchased(out: &mut dyn Write, count: u32) -> std::io::Result<()> {
    writeln!(out, "You have purchased {} ticket(s).", count)
}

pub fn display_results(out: &mut dyn Write, report: &str) -> std::io::Result<()> {
    writeln!(out, "{}", report)
}

pub fn game_over(out: &mut dyn Write, balance: Cents) -> std::io::Result<()> {
    writeln!(out, "Your balance is at ${}, Game Over!", format_cents(balance))
}
