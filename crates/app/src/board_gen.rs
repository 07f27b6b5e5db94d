//! Sample board generation for testing.
//!
//! When no board is specified, we generate one with interesting
//! compression characteristics: mix of blank background, solid color
//! strokes, and scattered detail pegs.
//!
//! # Design
//!
//! Generated boards have:
//! - Long blank stretches (highly compressible runs)
//! - Solid strokes of one color (medium-length runs)
//! - Scattered single pegs (run-free noise)
//!
//! This makes the codec selection visible in the encoding summary.

use pegtoken_core::alphabet::Alphabet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a sample board with mixed compressibility.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `cells`: number of pegs on the board
/// - `alphabet`: the palette; index 0 is the blank peg
///
/// # Returns
/// A symbol sequence of exactly `cells` pegs, every symbol drawn from
/// the alphabet.
pub fn generate_board(seed: u64, cells: usize, alphabet: &Alphabet) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = String::with_capacity(cells);

    // Symbols are decimal digits, so chars and bytes count the same
    while board.len() < cells {
        let span = (cells - board.len()).min(rng.gen_range(4..=60));

        // Choose stretch type randomly
        match rng.gen_range(0..10u8) {
            // 50% blank background
            0..=4 => {
                for _ in 0..span {
                    board.push('0');
                }
            }

            // 30% solid stroke of one color
            5..=7 => {
                let color = pick_color(&mut rng, alphabet);
                for _ in 0..span {
                    board.push(color);
                }
            }

            // 20% scattered detail pegs
            _ => {
                for _ in 0..span {
                    let index = rng.gen_range(0..alphabet.len());
                    board.push(symbol_at(alphabet, index));
                }
            }
        }
    }

    board
}

/// Pick a non-blank color, falling back to blank for a 1-color palette.
fn pick_color(rng: &mut ChaCha8Rng, alphabet: &Alphabet) -> char {
    if alphabet.len() < 2 {
        return symbol_at(alphabet, 0);
    }
    let index = rng.gen_range(1..alphabet.len());
    symbol_at(alphabet, index)
}

/// The symbol for an index known to be in range.
fn symbol_at(alphabet: &Alphabet, index: usize) -> char {
    alphabet.symbol(index).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_board_length() {
        let alphabet = Alphabet::new(8).unwrap();
        let board = generate_board(42, 732, &alphabet);
        assert_eq!(board.chars().count(), 732);
    }

    #[test]
    fn test_determinism() {
        let alphabet = Alphabet::new(8).unwrap();
        let board1 = generate_board(12345, 2000, &alphabet);
        let board2 = generate_board(12345, 2000, &alphabet);

        assert_eq!(board1, board2);
    }

    #[test]
    fn test_different_seeds() {
        let alphabet = Alphabet::new(8).unwrap();
        let board1 = generate_board(1, 732, &alphabet);
        let board2 = generate_board(2, 732, &alphabet);

        assert_ne!(board1, board2);
    }

    #[test]
    fn test_symbols_stay_in_alphabet() {
        for colors in [1, 2, 8, 9, 10] {
            let alphabet = Alphabet::new(colors).unwrap();
            let board = generate_board(999, 500, &alphabet);
            assert!(alphabet.validate(&board).is_ok());
        }
    }

    #[test]
    fn test_various_sizes() {
        let alphabet = Alphabet::new(9).unwrap();
        for cells in [0, 1, 100, 732, 5000] {
            let board = generate_board(7, cells, &alphabet);
            assert_eq!(board.chars().count(), cells);
        }
    }
}
