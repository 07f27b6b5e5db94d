//! pegtoken: encode a peg board into a URL token and back.
//!
//! Pipeline: resolve config -> obtain board (given or generated) ->
//! pack through the dual-codec selector -> verify the round trip ->
//! report peg counts and the encoding summary. With --token, the
//! pipeline runs in reverse and prints the decoded board.

mod board_gen;
mod config;

use config::Config;
use pegtoken_core::alphabet::Alphabet;
use pegtoken_core::selector;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("try --help");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> pegtoken_core::Result<()> {
    let alphabet = Alphabet::new(config.colors)?;

    // Decode mode: token in, board out
    if let Some(token) = &config.token {
        let board = selector::unpack(token)?;
        alphabet.validate(&board)?;

        println!("Decoded {} pegs", board.chars().count());
        println!("{board}");
        print_peg_counts(&alphabet, &board);
        return Ok(());
    }

    // Encode mode: board in, token out
    let board = match &config.board {
        Some(board) => {
            alphabet.validate(board)?;
            board.clone()
        }
        None => board_gen::generate_board(config.seed, config.pegs, &alphabet),
    };

    let (token, stats) = selector::pack_detailed(&board)?;
    println!("{token}");

    // The codecs are pure, so this can only fail if the code is wrong;
    // check anyway and say so, like any transfer tool would
    let decoded = selector::unpack(&token)?;
    if decoded == board {
        println!("Verification: PASSED ✓");
    } else {
        println!("Verification: FAILED ✗ (decoded board differs)");
    }

    print_peg_counts(&alphabet, &board);
    if config.print_stats {
        stats.print_summary();
    }
    Ok(())
}

/// Print how many pegs of each color the board holds.
fn print_peg_counts(alphabet: &Alphabet, board: &str) {
    let mut counts = vec![0usize; alphabet.len()];
    for symbol in board.chars() {
        if let Ok(index) = alphabet.index(symbol) {
            counts[index] += 1;
        }
    }

    println!("\n=== Peg Counts ===");
    for (index, count) in counts.iter().enumerate() {
        if index == 0 {
            println!("blank: {count}");
        } else {
            println!("color {index}: {count}");
        }
    }
}
