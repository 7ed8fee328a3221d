use std::io;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = lotto_cli::run(std::env::args(), &mut input, &mut out, &mut err);
    std::process::exit(code);
}
