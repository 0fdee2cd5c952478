//! CLI blackjack demo.
//!
//! Run with `RUST_LOG=bjround=debug` to see the engine's trace events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{CardView, Outcome, Phase, RoundState, RoundView, TableOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_bet_limit(Some(100));
    let mut round =
        RoundState::new(options, seed).with_player_name(prompt_raw("Enter your name: "));
    let name = round.player().name().to_string();

    loop {
        let bankroll = round.player().bankroll();
        if bankroll == 0 {
            println!("{name}, you are out of chips. Game over.");
            break;
        }

        let limit = bankroll.min(100);
        let Some(bet) = prompt_i64(&format!("{name}, bet (1-{limit}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        round = match round.place_bet(bet).and_then(|r| r.deal()) {
            Ok(next) => next,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        while round.phase() == Phase::PlayerTurn {
            print_table(&round.view());

            let action = prompt_line("[h]it [s]tand: ");
            let result = match action.as_str() {
                "h" | "hit" => round.hit(),
                "s" | "stand" => round.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(next) => round = next,
                Err(err) => println!("Action error: {err}"),
            }
        }

        let view = round.view();
        print_table(&view);
        if let Some(settlement) = view.settlement {
            let verdict = match settlement.outcome {
                Outcome::Win => "You win",
                Outcome::Push => "Push",
                Outcome::Lose => "Dealer wins",
            };
            println!(
                "{verdict}: payout {} (net {})",
                settlement.payout,
                settlement.net()
            );
        }

        round = round.reset();
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn prompt_i64(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &RoundView) {
    println!("\nDeck: {} cards remaining", view.cards_remaining);
    println!(
        "Dealer: {} (showing {}, {:?})",
        format_cards(&view.dealer.cards),
        view.dealer.visible_total,
        view.dealer.status
    );
    println!(
        "{}: {} (value {}{}) | bet {} | bankroll {} | {:?}",
        view.player.name,
        format_cards(&view.player.cards),
        view.player.total,
        if view.player.soft { ", soft" } else { "" },
        view.player.bet,
        view.player.bankroll,
        view.player.status
    );
    println!();
}

fn format_cards(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|card| match card {
            CardView::Hidden => "??".to_string(),
            CardView::Shown(card) => card.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
