//! CLI Tien Len example.
//!
//! Plays the opening lead: the holder of the three of clubs leads, then the
//! human may keep laying down combinations until their hand is empty.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tienlen::{Card, Player, PlayerId, Rank, Suit, Table, TableOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    println!("Tien Len CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);

    let starter = match table.find_starting_player() {
        Ok(player) => player,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };
    println!("{} holds the three of clubs and leads.", starter.name);

    let Some(human) = table.human_player() else {
        println!("No human seat at this table.");
        return;
    };

    if let Some(me) = table.players.lock().iter_mut().find(|p| p.is_human) {
        me.hand.sort_by_rank();
    }

    let seats = table.players().len() as PlayerId;
    let mut seat = starter.id;
    loop {
        match table.activate_player(seat) {
            Ok(Some(play)) => {
                let ids: Vec<_> = play.cards.iter().map(|c| c.id).collect();
                match table.play(seat, &ids) {
                    Ok(record) => println!(
                        "Player {} plays {:?}: {}",
                        record.owner,
                        record.category,
                        format_cards(&record.cards)
                    ),
                    Err(err) => println!("Play error: {err}"),
                }
            }
            Ok(None) if seat != human.id => println!("Player {seat} passes."),
            Ok(None) => {
                if !human_turn(&table, human.id) {
                    println!("Goodbye.");
                    return;
                }
            }
            Err(err) => {
                println!("Turn error: {err}");
                return;
            }
        }

        if table.player(human.id).is_some_and(|p| p.hand.is_empty()) {
            println!("You are out of cards. Game over.");
            return;
        }

        seat = (seat + 1) % seats;
    }
}

/// Runs the human's turn. Returns `false` when the player quits.
fn human_turn(table: &Table, human: PlayerId) -> bool {
    loop {
        let Some(player) = table.player(human) else {
            return false;
        };
        print_hand(&player);
        if let Some(category) = table.selected_category(human) {
            println!("Selection: {category:?}");
        }

        let input = prompt_line("[number] toggle, [p]lay, [s]kip, [q]uit: ");
        match input.as_str() {
            "q" | "quit" => return false,
            "s" | "skip" => return true,
            "p" | "play" => match table.play_selected(human) {
                Ok(record) => {
                    println!(
                        "You play {:?}: {}",
                        record.category,
                        format_cards(&record.cards)
                    );
                    return true;
                }
                Err(err) => println!("Play error: {err}"),
            },
            other => match other.parse::<usize>() {
                Ok(index) => match player.hand.cards().get(index) {
                    Some(card) => table.select(human, card.id),
                    None => println!("No card at {index}."),
                },
                Err(_) => println!("Unknown command."),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_hand(player: &Player) {
    println!("\n{} ({} cards)", player.name, player.hand.len());
    for (index, card) in player.hand.cards().iter().enumerate() {
        let marker = if card.selected { "*" } else { " " };
        print!("{marker}{index}:{} ", format_card(card));
    }
    println!();
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        Rank::Two => "2",
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
