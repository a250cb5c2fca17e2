//! The removal rule for a single toothpick.

use super::neighbor::{first_occupied_neighbor, Direction};
use crate::board::{Board, Position};

/// A toothpick is removable when every nearest toothpick in the four
/// cardinal directions shares its orientation. Edges never block; empty and
/// off-board positions are never removable.
#[must_use]
pub fn is_removable(board: &Board, pos: Position) -> bool {
    let Some(orientation) = board.orientation(pos) else {
        return false;
    };

    Direction::ALL
        .into_iter()
        .all(|dir| first_occupied_neighbor(board, pos, dir).agrees_with(orientation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::create_board;

    #[test]
    fn test_initial_board_has_no_matches() {
        let board = create_board(5);
        assert!(board.positions().all(|p| !is_removable(&board, p)));
    }

    #[test]
    fn test_empty_and_off_board_cells() {
        let board: Board = ". V H\nV V V\nH V H".parse().unwrap();
        assert!(!is_removable(&board, Position::new(0, 0)));
        assert!(!is_removable(&board, Position::new(5, 5)));
    }

    #[test]
    fn test_all_neighbors_match() {
        let board: Board = "H V H\nV V V\nH V H".parse().unwrap();
        assert!(is_removable(&board, Position::new(1, 1)));
        assert!(!is_removable(&board, Position::new(0, 1)));
    }

    #[test]
    fn test_edges_are_neutral() {
        // Lone toothpick: all four scans hit the edge.
        let board: Board = ". . .\n. H .\n. . .".parse().unwrap();
        assert!(is_removable(&board, Position::new(1, 1)));

        // Corner with matching neighbors on its two inner sides.
        let board: Board = "V V H\nV H V\nH V H".parse().unwrap();
        assert!(is_removable(&board, Position::new(0, 0)));
    }

    #[test]
    fn test_mismatch_beyond_gap_blocks() {
        let board: Board = "H . V\n. . .\n. . .".parse().unwrap();
        assert!(!is_removable(&board, Position::new(0, 0)));
        assert!(!is_removable(&board, Position::new(0, 2)));
    }
}
