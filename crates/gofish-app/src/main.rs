#![deny(warnings)]

mod console;
mod human;

use anyhow::Result;
use clap::Parser;
use console::Narrator;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use gofish_bot::BotPolicy;
use gofish_core::game::engine::Game;
use gofish_core::game::policy::DecisionPolicy;
use gofish_core::model::deck::Deck;
use human::HumanPolicy;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HUMAN_NAME: &str = "You";
const BOT_ROSTER: [&str; 6] = ["Emily", "Sarah", "Jessica", "Zoe", "Megan", "Claire"];

/// Console Go Fish against belief-tracking bots.
#[derive(Debug, Parser)]
#[command(name = "gofish", version, about = "Go Fish with belief-tracking bots")]
struct Cli {
    /// Seed for the shuffle and bot tie-breaks (random when omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Players at the table, including you.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=6))]
    players: u8,

    /// Let bots fill every seat and watch them play.
    #[arg(long)]
    bots_only: bool,

    /// Pacing delay after each bot turn, in milliseconds. 0 disables.
    #[arg(long, value_name = "MS", default_value_t = 800)]
    bot_delay_ms: u64,

    /// Show host progress and bot reasoning on stderr.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    loop {
        run_game(&cli)?;
        if cli.bots_only || !play_again() {
            break;
        }
    }
    Ok(())
}

/// Logs go to stderr so narration on stdout stays clean. `--verbose`
/// raises the default filter to include bot reasoning; an explicit
/// RUST_LOG wins either way.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,gofish_bot=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_game(cli: &Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let player_count = cli.players as usize;

    let mut seats: Vec<(String, bool)> = Vec::with_capacity(player_count);
    if !cli.bots_only {
        seats.push((HUMAN_NAME.to_string(), false));
    }
    for name in BOT_ROSTER.iter().take(player_count - seats.len()) {
        seats.push(((*name).to_string(), true));
    }
    let seat_refs: Vec<(&str, bool)> = seats
        .iter()
        .map(|(name, is_bot)| (name.as_str(), *is_bot))
        .collect();

    let abort = Rc::new(Cell::new(false));
    let mut policies: Vec<Box<dyn DecisionPolicy>> = seats
        .iter()
        .enumerate()
        .map(|(index, (_, is_bot))| {
            if *is_bot {
                Box::new(BotPolicy::with_seed(seed.wrapping_add(index as u64)))
                    as Box<dyn DecisionPolicy>
            } else {
                Box::new(HumanPolicy::new(abort.clone())) as Box<dyn DecisionPolicy>
            }
        })
        .collect();

    let mut game = Game::new(&seat_refs, Deck::shuffled_with_seed(seed));
    let mut narrator = Narrator::new((!cli.bots_only).then(|| HUMAN_NAME.to_string()));
    let pacing = Duration::from_millis(cli.bot_delay_ms);

    info!(seed, players = player_count, "starting game");
    narrator.banner(seed, player_count);
    game.deal(&mut narrator);

    while !game.is_over() && !abort.get() {
        let bot_turn = game.current_player().is_bot();
        let has_cards = !game.current_player().hand().is_empty();

        if !bot_turn && has_cards {
            game.emit_status(&mut narrator);
        }
        game.take_turn(&mut policies, &mut narrator);

        if bot_turn && has_cards && !pacing.is_zero() {
            thread::sleep(pacing);
        }
    }

    // Reached on normal completion and on operator abort alike, so an
    // interrupted game still reports standings.
    game.finish(&mut narrator);
    info!(top_score = game.winners().0, "game finished");
    Ok(())
}

fn play_again() -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Play another game?")
        .default(false)
        .interact_opt()
        .ok()
        .flatten()
        .unwrap_or(false)
}
