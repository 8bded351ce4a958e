//! Console implementations of the boundary traits.
//!
//! Thin stdin/stdout wrappers with no game logic: prompting, re-prompting
//! on bad input, and rendering the board and screens.

use std::io::{self, BufRead, Write};

use crate::core::{Bid, GameState, Player, BOARD_SIZE};
use crate::rules::Outcome;

use super::{BidSource, Renderer};

/// Render the board as a single row with the token's cell marked.
///
/// ```
/// use footsteps::io::console::board_row;
///
/// assert_eq!(board_row(4), "A | . . . . X . . . . | B");
/// ```
#[must_use]
pub fn board_row(token_position: usize) -> String {
    let cells: Vec<&str> = (0..BOARD_SIZE)
        .map(|i| if i == token_position { "X" } else { "." })
        .collect();
    format!("A | {} | B", cells.join(" "))
}

/// Stdin-backed bid collection with a re-prompt loop.
pub struct ConsoleBidSource;

impl ConsoleBidSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleBidSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BidSource for ConsoleBidSource {
    fn collect_bid(&mut self, player: Player, remaining_points: u32) -> Bid {
        if remaining_points == 0 {
            println!("{player} has no points left and bids 0.");
            return Bid::zero();
        }

        let stdin = io::stdin();
        loop {
            print!("{player}, enter your bid (0-{remaining_points}): ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
                // Input closed; treat as a zero bid so the game can finish
                println!();
                return Bid::zero();
            }

            match line.trim().parse::<u32>() {
                Ok(amount) => match Bid::new(amount, remaining_points) {
                    Ok(bid) => return bid,
                    Err(_) => println!("Invalid bid. Try again."),
                },
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }
}

/// Stdout renderer: board, points, start and end screens.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Scroll old output off the screen.
    fn clear_screen(&self) {
        println!("{}", "\n".repeat(50));
    }

    /// Show the start screen with the rules and wait for ENTER.
    pub fn show_start_screen(&mut self) {
        self.clear_screen();
        println!("===================================");
        println!("           FOOTSTEPS");
        println!("===================================\n");

        println!("GAME DESCRIPTION:");
        println!("Two players sit at opposite ends of a row.");
        println!("A token starts in the center of the board.\n");

        println!("HOW TO PLAY:");
        println!("- Each player starts with 50 points");
        println!("- Every round, both players secretly bid points");
        println!("- The higher bid moves the token one space toward that player");
        println!("- BOTH players lose the points they bid");
        println!("- If bids are equal, the token does not move");
        println!("- If a player runs out of points, the other may continue bidding");
        println!("- The game ends when both players have no points");
        println!("  or when the token reaches the end of the board\n");

        println!("WINNING:");
        println!("- The player closest to the token at the end wins");
        println!("- Equal distance results in a draw\n");

        print!("Press ENTER to start the game...");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }

    fn show_points(&self, state: &GameState) {
        println!(
            "Points - Player A: {} | Player B: {}\n",
            state.points(Player::A),
            state.points(Player::B)
        );
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleRenderer {
    fn show_round(&mut self, state: &GameState) {
        self.clear_screen();
        println!("\n{}\n", board_row(state.token_position()));
        self.show_points(state);
    }

    fn show_outcome(&mut self, state: &GameState, outcome: Outcome) {
        self.clear_screen();
        println!("===================================");
        println!("            GAME OVER");
        println!("===================================\n");

        println!("\n{}\n", board_row(state.token_position()));
        print!("Final ");
        self.show_points(state);

        println!("{outcome}");
        println!("\nThank you for playing Footsteps!");
    }
}
