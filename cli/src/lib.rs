use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod config;
pub mod game;
pub mod ui;

use game::GameOptions;

/// Runs the CLI with provided args, reading prompts from `input` and writing
/// to the given writers. Returns the intended process exit code.
pub fn run<I, S>(args: I, input: &mut dyn BufRead, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let parsed = LottoCli::try_parse_from(&argv);
    let cli = match parsed {
        Err(_) => {
            let _ = writeln!(out, "Lottery App CLI\n");
            let _ = writeln!(out, "Usage: lotto <command> [options]\n");
            let _ = writeln!(out, "Commands:");
            for c in ["play", "sim", "cfg"] {
                let _ = writeln!(out, "  {}", c);
            }
            let _ = writeln!(out, "\nOptions:\n  -h, --help     Show this help");
            return 0;
        }
        Ok(cli) => cli,
    };

    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return 2;
        }
    };

    match cli.cmd {
        Commands::Cfg => {
            match serde_json::to_string_pretty(&cfg) {
                Ok(json) => {
                    let _ = writeln!(out, "{}", json);
                    0
                }
                Err(e) => {
                    let _ = ui::write_error(err, &e.to_string());
                    1
                }
            }
        }
        Commands::Play { seed, log } => {
            let opts = GameOptions {
                seed: seed.or(cfg.seed),
                log,
                rounds: None,
                auto: false,
            };
            game::play(&cfg.game, &opts, input, out, err)
        }
        Commands::Sim { rounds, seed, log } => {
            let opts = GameOptions {
                seed: seed.or(cfg.seed),
                log,
                rounds: Some(rounds),
                auto: true,
            };
            game::play(&cfg.game, &opts, input, out, err)
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lotto", about = "Lottery App CLI", version, disable_help_flag = true)]
struct LottoCli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive game against the computer players
    Play {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Automated rounds with the human played by the machine
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Print the effective configuration as JSON
    Cfg,
}
