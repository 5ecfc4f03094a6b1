//! Rock-Paper-Scissors CLI
//!
//! Play rounds in the terminal, replay the sample session, or check how a
//! result string would be classified.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rps_core::explain_outcome;
use session::{
    create_opponent, save_figure, score_text, GameSession, SessionConfig, FIGURE_SIZE,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Rounds played by `demo`: ai, tie, player, player, ai
const DEMO_ROUNDS: [(&str, &str); 5] = [("R", "P"), ("P", "P"), ("S", "P"), ("R", "S"), ("S", "R")];

#[derive(Parser, Debug)]
#[command(name = "rps", version, about = "Rock-Paper-Scissors with round statistics")]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Opponent spec: fixed, fixed:<R|P|S>, random, random:<seed>
    #[arg(long, global = true)]
    opponent: Option<String>,

    /// Leave ties out of the win rate
    #[arg(long, global = true)]
    exclude_ties: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively; enter R, P or S each round, q to quit
    Play,
    /// Record the sample rounds and print the session report
    Demo {
        /// Print the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Also write the win-rate plot and last-moves strip to an SVG file
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Show how a result string is classified
    Classify {
        /// Free-text result, e.g. "AI Wins!"
        text: Vec<String>,
    },
}

fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(opponent) = &cli.opponent {
        config.opponent = opponent.clone();
    }
    if cli.exclude_ties {
        config.exclude_ties = true;
    }
    Ok(config)
}

fn run_play(session: &mut GameSession) -> Result<()> {
    println!("Can you beat the AI? ({})", session.opponent_name());
    println!("Enter R, P or S (q to quit).");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading move from stdin")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if !input.is_empty() {
            match session.play(input) {
                Ok(report) => {
                    println!("{}", report.display_text());
                    println!("{}", report.score_text());
                }
                Err(e) => {
                    warn!(input, "rejected move");
                    println!("{e}");
                }
            }
        }
        print!("> ");
        stdout.flush()?;
    }

    println!();
    println!("{}", score_text(&session.scores()));
    session.summary().print_report();
    Ok(())
}

fn run_demo(session: &mut GameSession, json: bool, out: Option<&Path>) -> Result<()> {
    for (player, opponent) in DEMO_ROUNDS {
        session.record(player, opponent, None)?;
    }

    let summary = session.summary();
    if json {
        println!("{}", summary.to_json().context("serializing summary")?);
    } else {
        summary.print_report();
        let strip = session.last_moves();
        println!("{}", strip.title);
        let row = |pick: fn(&session::MoveSlot) -> Option<rps_core::Move>| {
            strip
                .slots
                .iter()
                .map(|slot| pick(slot).map_or("-".to_string(), |m| m.to_string()))
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("  P  {}", row(|s| s.player));
        println!("  A  {}", row(|s| s.opponent));
    }

    if let Some(path) = out {
        save_figure(path, &session.win_rate_plot(), &session.last_moves(), FIGURE_SIZE)
            .with_context(|| format!("writing figure to {}", path.display()))?;
        info!(path = %path.display(), "figure written");
        if !json {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn run_classify(text: &[String]) {
    let text = text.join(" ");
    let result = explain_outcome(&text);
    match result.rule {
        Some(rule) => println!("{:?} -> {} (rule: {})", text, result.outcome.as_str(), rule),
        None => println!("{:?} -> {} (no rule matched)", text, result.outcome.as_str()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    config.logging.init();

    if let Command::Classify { text } = &cli.command {
        run_classify(text);
        return Ok(());
    }

    let opponent = create_opponent(&config.opponent)?;
    let mut session = GameSession::new(opponent, &config);

    match cli.command {
        Command::Play => run_play(&mut session),
        Command::Demo { json, out } => run_demo(&mut session, json, out.as_deref()),
        Command::Classify { .. } => Ok(()),
    }
}
