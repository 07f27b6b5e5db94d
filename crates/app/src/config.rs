//! Configuration for the pegtoken application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including a randomized sample board that is reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

/// Complete configuration for one encode or decode run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    /// Board to encode, as a symbol sequence (None = generate sample)
    pub board: Option<String>,

    /// Token to decode instead of encoding a board
    pub token: Option<String>,

    // === Board shape ===
    /// Number of pegs in a generated board
    pub pegs: usize,

    /// Palette size (colors including blank)
    pub colors: usize,

    /// Seed for sample-board generation
    pub seed: u64,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the encoding summary
    pub print_stats: bool,
}

/// Pegs in the original board: 12 alternating row pairs of 30 and 31.
const DEFAULT_PEGS: usize = 12 * (30 + 31);

/// Default palette: blank plus seven colors.
const DEFAULT_COLORS: usize = 8;

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no seed is provided, a time-based seed is used; passing --seed
    /// makes the generated board fully deterministic.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut board: Option<String> = None;
        let mut token: Option<String> = None;
        let mut pegs: Option<usize> = None;
        let mut colors: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--board" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--board requires a symbol sequence".to_string());
                    }
                    board = Some(args[i].clone());
                }
                "--token" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--token requires a token".to_string());
                    }
                    token = Some(args[i].clone());
                }
                "--pegs" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--pegs requires a number".to_string());
                    }
                    pegs = Some(args[i].parse().map_err(|_| "invalid pegs")?);
                }
                "--colors" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--colors requires a number".to_string());
                    }
                    colors = Some(args[i].parse().map_err(|_| "invalid colors")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(Config {
            board,
            token,
            pegs: pegs.unwrap_or(DEFAULT_PEGS),
            colors: colors.unwrap_or(DEFAULT_COLORS),
            seed,
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Board: {}",
            self.board.as_deref().unwrap_or("(generate sample)")
        );
        println!("Token: {}", self.token.as_deref().unwrap_or("(none)"));
        println!();
        println!("Pegs: {}", self.pegs);
        println!("Colors: {}", self.colors);
        println!("Seed: {}", self.seed);
        println!();
    }
}

fn print_help() {
    println!("pegtoken: Peg-board serialization with dual-codec compression");
    println!();
    println!("USAGE:");
    println!("    pegtoken [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --board <SYMBOLS>   Board to encode (default: generate sample)");
    println!("    --token <TOKEN>     Decode a token instead of encoding");
    println!();
    println!("    --pegs <N>          Generated board size (default: 732)");
    println!("    --colors <N>        Palette size, 1-10 (default: 8)");
    println!("    --seed <N>          Random seed for determinism");
    println!();
    println!("    --print-config      Print resolved configuration");
    println!("    --no-stats          Don't print the encoding summary");
    println!("    --help, -h          Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    pegtoken                            # Encode a random sample board");
    println!("    pegtoken --seed 42                  # Deterministic sample board");
    println!("    pegtoken --board 0001112222         # Encode a specific board");
    println!("    pegtoken --token 'r=%5B%220%22%2C%220%22%5D'   # Decode a token");
    println!();
}
