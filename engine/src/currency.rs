/// Currency amounts are fixed-point minor units (cents). Signed so that a
/// round's house profit can go negative when round-up overpays a tier.
pub type Cents = i64;

/// Formats a cent amount as dollars with two decimals, e.g. `12.00`, `-0.03`.
pub fn format_cents(amount: Cents) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Ceiling division of a prize pool across `n` winning tickets.
/// An empty tier contributes nothing.
pub fn per_ticket_prize(pool: Cents, n: usize) -> Cents {
    if n == 0 {
        return 0;
    }
    let n = n as Cents;
    (pool + n - 1) / n
}
