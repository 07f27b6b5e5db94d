//! Integration tests for the full pegtoken pipeline.
//!
//! These tests verify end-to-end behavior: palette indices -> symbol
//! sequence -> pack (dual-codec selection) -> tagged token -> unpack ->
//! indices, with verification that output matches input.

use pegtoken_core::{
    alphabet::Alphabet,
    huffman, rle,
    selector::{pack, pack_detailed, unpack},
    token::Scheme,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Cells in the original board: 12 alternating row pairs of 30 and 31.
const GRID_CELLS: usize = 12 * (30 + 31);

/// Build a deterministic board with mixed texture: blank stretches,
/// solid color runs, and scattered single pegs.
fn sample_board(seed: u64, cells: usize, colors: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = String::with_capacity(cells);

    while board.len() < cells {
        let span = (cells - board.len()).min(rng.gen_range(1..=48));
        match rng.gen_range(0..10u8) {
            0..=4 => {
                for _ in 0..span {
                    board.push('0');
                }
            }
            5..=7 => {
                let color = char::from_digit(rng.gen_range(1..colors as u32), 10).unwrap();
                for _ in 0..span {
                    board.push(color);
                }
            }
            _ => {
                for _ in 0..span {
                    board.push(char::from_digit(rng.gen_range(0..colors as u32), 10).unwrap());
                }
            }
        }
    }
    board
}

/// Test the UI-shaped pipeline: indices in, token out, indices back.
#[test]
fn test_full_pipeline_round_trip() {
    let alphabet = Alphabet::new(8).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let indices: Vec<usize> = (0..GRID_CELLS).map(|_| rng.gen_range(0..8)).collect();

    let board = alphabet.sequence_from_indices(&indices).unwrap();
    let token = pack(&board).unwrap();
    let decoded = unpack(&token).unwrap();

    assert_eq!(decoded, board, "board doesn't survive the round trip");
    assert_eq!(alphabet.indices_from_sequence(&decoded).unwrap(), indices);
}

/// Both codecs and the selector must round-trip every board shape.
#[test]
fn test_round_trip_many_boards() {
    for seed in 0..20 {
        for colors in [8, 9] {
            let board = sample_board(seed, GRID_CELLS, colors);

            let (chars, runs) = rle::encode(&board);
            assert_eq!(rle::decode(&chars, &runs).unwrap(), board);

            let (codes, packed) = huffman::encode(&board).unwrap();
            assert_eq!(huffman::decode(&codes, &packed).unwrap(), board);

            let token = pack(&board).unwrap();
            assert_eq!(unpack(&token).unwrap(), board, "seed {seed}");
        }
    }
}

/// A blank board is one giant run; RLE must win by a wide margin.
#[test]
fn test_blank_board_compresses_to_runs() {
    let board = "0".repeat(GRID_CELLS);
    let (token, stats) = pack_detailed(&board).unwrap();

    assert_eq!(stats.scheme, Scheme::Rle);
    assert!(stats.token_len < GRID_CELLS / 4);
    assert_eq!(unpack(&token).unwrap(), board);
}

/// Run-free boards flip the selection to Huffman.
#[test]
fn test_run_free_board_selects_huffman() {
    let board: String = (0..GRID_CELLS)
        .map(|i| if i % 2 == 0 { '3' } else { '5' })
        .collect();
    let (token, stats) = pack_detailed(&board).unwrap();

    assert_eq!(stats.scheme, Scheme::Huffman);
    assert!(token.starts_with("h="));
    assert_eq!(unpack(&token).unwrap(), board);
}

/// The selected tag always matches the shorter raw payload.
#[test]
fn test_selection_consistency() {
    for seed in 100..120 {
        let board = sample_board(seed, GRID_CELLS, 8);
        let (token, stats) = pack_detailed(&board).unwrap();

        match stats.scheme {
            Scheme::Rle => {
                assert!(token.starts_with("r="));
                assert!(stats.rle_payload_len <= stats.huffman_payload_len);
            }
            Scheme::Huffman => {
                assert!(token.starts_with("h="));
                assert!(stats.huffman_payload_len < stats.rle_payload_len);
            }
        }
    }
}

/// Concrete scenario from the codec contract.
#[test]
fn test_rle_concrete_scenario() {
    let (chars, runs) = rle::encode("0001112222");
    assert_eq!(chars, "012");
    assert_eq!(runs, "223");
    assert_eq!(rle::decode(&chars, &runs).unwrap(), "0001112222");
}

/// A 40-run splits at the 36 cap.
#[test]
fn test_rle_run_cap() {
    let (chars, runs) = rle::encode(&"4".repeat(40));
    assert_eq!(chars, "44");
    assert_eq!(runs, "z3");
}

/// No code may prefix another for any multi-symbol board.
#[test]
fn test_huffman_prefix_free_on_boards() {
    for seed in 0..10 {
        let board = sample_board(seed, GRID_CELLS, 9);
        let codes = huffman::code_table(&board);
        let entries: Vec<&String> = codes.values().collect();
        for (i, a) in entries.iter().enumerate() {
            for (j, b) in entries.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()));
                }
            }
        }
    }
}

/// Single-color and empty boards must stay encodable and decodable.
#[test]
fn test_degenerate_boards() {
    let boards = [
        String::new(),
        "0".to_owned(),
        "0000".to_owned(),
        "8".repeat(GRID_CELLS),
    ];
    for board in &boards {
        let token = pack(board).unwrap();
        assert_eq!(unpack(&token).unwrap(), *board);
    }
}

/// Identical boards produce identical tokens.
#[test]
fn test_deterministic_tokens() {
    let board = sample_board(7, GRID_CELLS, 8);
    assert_eq!(pack(&board).unwrap(), pack(&board).unwrap());
}

/// Tokens must survive being dropped into a query string unchanged.
#[test]
fn test_token_query_string_safety() {
    for seed in [1, 2, 3] {
        let board = sample_board(seed, GRID_CELLS, 8);
        let token = pack(&board).unwrap();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "%-_.!~*'()=".contains(c)));
    }
}

/// Damaged tokens fail loudly, never silently mis-decoding.
#[test]
fn test_malformed_tokens_rejected() {
    assert!(unpack("").is_err());
    assert!(unpack("q=whatever").is_err());
    assert!(unpack("r=%5B%22a%22%5D").is_err()); // one-element array
    assert!(unpack("h=%7B%7D").is_err()); // object, not array
    assert!(unpack("h=%5B%7B%220%22%3A%220%22%7D%2C%220%22%5D").is_err()); // sentinel lost

    // Flipping the scheme tag on a valid token must not half-decode
    let token = pack(&"01".repeat(200)).unwrap();
    let flipped = token.replacen("h=", "r=", 1);
    assert!(unpack(&flipped).is_err());
}
