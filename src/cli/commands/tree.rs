//! Game tree analysis
//!
//! This command enumerates the reachable state space from the empty board
//! and reports counts by depth.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

use crate::board::Board;

#[derive(Parser, Debug)]
#[command(about = "Enumerate the reachable state space")]
pub struct TreeArgs {
    /// Export the game tree to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    println!("Enumerating states reachable from the empty board...");

    let states = collect_reachable_states();

    println!("\n=== Game Tree Statistics ===");
    println!("Total states: {}", super::format_number(states.len()));

    let mut depth_counts = HashMap::new();
    let mut terminal_count = 0;
    for board in &states {
        *depth_counts.entry(board.occupied_count()).or_insert(0) += 1;
        if board.is_terminal() {
            terminal_count += 1;
        }
    }

    println!("\nStates by depth:");
    for depth in 0..=9 {
        if let Some(count) = depth_counts.get(&depth) {
            println!("  Depth {depth}: {count} states");
        }
    }
    println!(
        "\nTerminal states: {}",
        super::format_number(terminal_count)
    );

    if let Some(path) = args.export {
        export_game_tree(&states, &path)?;
        println!("\nGame tree exported to: {}", path.display());
    }

    Ok(())
}

/// Breadth-first enumeration of every board reachable from the empty board
fn collect_reachable_states() -> Vec<Board> {
    let mut states = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    queue.push_back(Board::new());
    visited.insert(Board::new().encode());

    while let Some(board) = queue.pop_front() {
        states.push(board);

        if board.is_terminal() {
            continue;
        }

        for mv in board.available_moves() {
            let next = board
                .make_move(mv)
                .expect("available moves should always apply");
            let key = next.encode();

            if !visited.contains(&key) {
                visited.insert(key);
                queue.push_back(next);
            }
        }
    }

    states
}

/// Export game tree to CSV file
fn export_game_tree(states: &[Board], path: &PathBuf) -> Result<()> {
    use std::{fs::File, io::Write};

    let mut rows: Vec<String> = states.iter().map(Board::encode).collect();
    rows.sort();

    let mut file = File::create(path)?;

    writeln!(file, "# Tic-Tac-Toe Game Tree")?;
    writeln!(file, "# Total states: {}", rows.len())?;
    writeln!(file)?;
    writeln!(file, "State,Depth,AvailableMoves")?;

    for row in rows {
        let board = Board::from_string(&row)?;
        let depth = board.occupied_count();
        let moves = board.available_moves().len();

        writeln!(file, "{row},{depth},{moves}")?;
    }

    Ok(())
}
