//! CLI Old Maid example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use oldmaid::{Card, Difficulty, Face, Game, GameEvent, GameOptions, GameState, Side, Suit};

fn main() {
    println!("Old Maid CLI example (type 'q' to quit)");

    let difficulty = prompt_difficulty();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_difficulty(difficulty);
    let game = Game::new(options, seed);

    print_log(&game);

    loop {
        match game.state() {
            GameState::PlayerTurn => {
                print_table(&game);

                let count = game.ai_card_count();
                let Some(index) =
                    prompt_usize(&format!("Pick a card from the AI's hand (1-{count}): "))
                else {
                    println!("Goodbye.");
                    return;
                };

                if index == 0 || index > count {
                    println!("Pick a number between 1 and {count}.");
                    continue;
                }

                if let Err(err) = game.player_draw(index - 1) {
                    println!("Draw error: {err}");
                    continue;
                }
                print_log(&game);
            }
            GameState::AiTurn => {
                // Give the player a moment before the AI strikes.
                println!("\nThe AI eyes your hand...");
                thread::sleep(Duration::from_millis(1200));

                if let Err(err) = game.ai_draw() {
                    println!("AI draw error: {err}");
                    return;
                }
                print_log(&game);
                thread::sleep(Duration::from_millis(400));
            }
            GameState::Over(outcome) => {
                print_table(&game);
                match outcome.winner {
                    Side::Player => {
                        if outcome.loser_held_both_jokers {
                            println!("You emptied your hand and left the AI holding both jokers. You win!");
                        } else {
                            println!("You emptied your hand. You win!");
                        }
                    }
                    Side::Ai => {
                        if outcome.loser_held_both_jokers {
                            println!("The AI emptied its hand and you are stuck with both jokers. You lose.");
                        } else {
                            println!("The AI emptied its hand. You lose.");
                        }
                    }
                }

                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" => {
                        game.reset();
                        print_log(&game);
                    }
                    _ => {
                        println!("Goodbye.");
                        return;
                    }
                }
            }
        }
    }
}

fn prompt_difficulty() -> Difficulty {
    loop {
        match prompt_line("Difficulty ([e]asy / [m]edium / [h]ard): ").as_str() {
            "e" | "easy" | "" => return Difficulty::Easy,
            "m" | "medium" => return Difficulty::Medium,
            "h" | "hard" => return Difficulty::Hard,
            _ => println!("Please answer e, m, or h."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nAI hand: {} hidden cards", game.ai_card_count());
    println!(
        "Discards: you {} | AI {}",
        game.player_discard_cards().len(),
        game.ai_discard_cards().len()
    );

    let cards = game.player_cards();
    let rendered: Vec<String> = cards.iter().map(format_card).collect();
    println!("Your hand: {}", rendered.join(" "));
}

fn print_log(game: &Game) {
    for event in game.drain_events() {
        match event {
            GameEvent::CardDrawn { side, card } => match side {
                Side::Player => println!("You drew the {card}."),
                Side::Ai => println!("The AI drew your {card}."),
            },
            GameEvent::PairDiscarded { side, pair } => {
                println!("{side} discarded a {pair}.");
            }
            GameEvent::GameEnded { winner, .. } => {
                println!("Game over: {winner} wins.");
            }
        }
    }
}

fn format_card(card: &Card) -> String {
    match card.face {
        Face::Suited(suit) => {
            let (symbol, color_code) = match suit {
                Suit::Spades => ("S", "34"),
                Suit::Hearts => ("H", "31"),
                Suit::Diamonds => ("D", "31"),
                Suit::Clubs => ("C", "32"),
            };
            format!("{}{}", card.rank_label(), colorize(symbol, color_code))
        }
        Face::Joker(_) => colorize("JOKER", "35"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
