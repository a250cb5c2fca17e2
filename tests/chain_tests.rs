//! Chain resolution integration tests.
//!
//! Covers the neighbor scan, the match rule and the pass-based resolver
//! together, with property tests over arbitrary boards.

use proptest::prelude::*;

use toothpick::board::{create_board, Board, Cell, Orientation, Position};
use toothpick::core::BoardSize;
use toothpick::rules::{is_removable, removable_cells, resolve};

// =============================================================================
// Fixed scenarios
// =============================================================================

/// Initial layouts alternate by parity of `row + col`.
#[test]
fn test_initial_layouts() {
    for n in BoardSize::MIN..=BoardSize::MAX {
        let board = create_board(n);
        for pos in board.positions() {
            let expected = if (pos.row + pos.col) % 2 == 0 {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            assert_eq!(board.orientation(pos), Some(expected));
        }
    }

    let three: Board = "HVH\nVHV\nHVH".parse().unwrap();
    assert_eq!(create_board(3), three);
}

/// A starting board is stable: resolving it changes nothing.
#[test]
fn test_initial_board_is_stable() {
    for n in BoardSize::MIN..=BoardSize::MAX {
        let board = create_board(n);
        let result = resolve(&board);
        assert_eq!(result.board, board);
        assert_eq!(result.removed_count, 0);
        assert!(result.removed_cells.is_empty());
    }
}

/// Toggling the centre of a 3x3 makes it match all four neighbors.
/// Corners and edges still see a mismatch, so nothing else goes.
#[test]
fn test_center_toggle_removes_only_center() {
    let mut board = create_board(3);
    board.toggle(Position::new(1, 1)).unwrap();

    let result = resolve(&board);
    assert_eq!(result.removed_count, 1);
    assert_eq!(result.removed_cells, vec![Position::new(1, 1)]);
    assert_eq!(result.pass_sizes.as_slice(), &[1]);

    let expected: Board = "HVH\nV.V\nHVH".parse().unwrap();
    assert_eq!(result.board, expected);
}

/// All cells in a pass are judged against the board as it stood before it.
///
/// The four corners match both their neighbors and go together. The edge
/// cells see the horizontal centre, the centre sees verticals, so all stay.
#[test]
fn test_pass_is_simultaneous() {
    let board: Board = "VVV\nVHV\nVVV".parse().unwrap();

    let result = resolve(&board);
    let passes: Vec<_> = result.passes().collect();
    assert_eq!(passes.len(), 1);
    assert_eq!(
        passes[0],
        &[
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(2, 0),
            Position::new(2, 2)
        ]
    );

    let expected: Board = ".V.\nVHV\n.V.".parse().unwrap();
    assert_eq!(result.board, expected);
}

/// A gap is skipped when looking for a neighbor.
#[test]
fn test_gap_reaches_far_neighbor() {
    let board: Board = "HH.\nV.V\n...".parse().unwrap();

    // (0, 0) sees V below; (0, 1) sees only edges below and right.
    assert!(!is_removable(&board, Position::new(0, 0)));
    assert!(is_removable(&board, Position::new(0, 1)));
    // (1, 2) looks left across the gap and finds a matching V.
    assert!(is_removable(&board, Position::new(1, 2)));

    let result = resolve(&board);
    assert_eq!(result.removed_cells, vec![Position::new(0, 1), Position::new(1, 2)]);
}

/// Gaps are skipped: a mismatch two cells away still blocks.
#[test]
fn test_gap_does_not_isolate() {
    let board: Board = "H.V\n...\n...".parse().unwrap();
    let result = resolve(&board);
    assert_eq!(result.removed_count, 0);
}

/// Isolated toothpicks only see edges and always go.
#[test]
fn test_isolated_toothpicks_removed() {
    let board: Board = "H..\n..V\n.H.".parse().unwrap();
    let result = resolve(&board);

    assert_eq!(result.removed_count, 3);
    assert!(result.board.is_cleared());
    assert_eq!(
        result.removed_cells,
        vec![Position::new(0, 0), Position::new(1, 2), Position::new(2, 1)]
    );
}

// =============================================================================
// Properties
// =============================================================================

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Toothpick(Orientation::Horizontal)),
        Just(Cell::Toothpick(Orientation::Vertical)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    (BoardSize::MIN..=BoardSize::MAX).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(arb_cell(), n), n)
            .prop_map(|rows| Board::from_rows(&rows).unwrap())
    })
}

proptest! {
    /// The resolved board has nothing left to remove.
    #[test]
    fn prop_resolution_reaches_fixed_point(board in arb_board()) {
        let result = resolve(&board);
        prop_assert!(removable_cells(&result.board).is_empty());

        let again = resolve(&result.board);
        prop_assert_eq!(again.removed_count, 0);
        prop_assert_eq!(&again.board, &result.board);
    }

    /// Counts, positions and pass sizes agree with each other and the boards.
    #[test]
    fn prop_removal_accounting(board in arb_board()) {
        let result = resolve(&board);

        prop_assert_eq!(result.removed_count, result.removed_cells.len());
        prop_assert_eq!(result.pass_sizes.iter().sum::<usize>(), result.removed_count);
        prop_assert!(result.pass_sizes.iter().all(|&n| n > 0));
        prop_assert_eq!(
            board.occupied_count() - result.board.occupied_count(),
            result.removed_count
        );

        for &pos in &result.removed_cells {
            prop_assert!(board.get(pos).unwrap().is_occupied());
            prop_assert_eq!(result.board.get(pos), Some(Cell::Empty));
        }

        // Survivors are untouched.
        for pos in result.board.occupied_positions() {
            prop_assert_eq!(result.board.get(pos), board.get(pos));
        }
    }

    /// The first pass removes exactly what is removable on the input.
    #[test]
    fn prop_first_pass_matches_input(board in arb_board()) {
        let result = resolve(&board);
        let expected = removable_cells(&board);
        let first = result.passes().next().map(<[Position]>::to_vec).unwrap_or_default();
        prop_assert_eq!(first, expected);
    }

    /// Nearest neighbors see each other, so a removed toothpick always
    /// matched whatever it was shielding. No removal can unblock another
    /// toothpick and every chain settles after one productive pass.
    #[test]
    fn prop_single_productive_pass(board in arb_board()) {
        let result = resolve(&board);
        prop_assert!(result.pass_sizes.len() <= 1);
    }

    /// Resolution never mutates its input.
    #[test]
    fn prop_input_untouched(board in arb_board()) {
        let snapshot = board.clone();
        let _ = resolve(&board);
        prop_assert_eq!(board, snapshot);
    }
}
