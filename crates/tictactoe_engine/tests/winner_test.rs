//! Tests for win detection over arbitrary boards.

use strum::IntoEnumIterator;
use tictactoe_engine::rules::{self, LINES};
use tictactoe_engine::{Board, Cell, Mark};

/// Decodes `code` (0..3^9) as a base-3 board: 0 empty, 1 X, 2 O.
fn board_from_code(mut code: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in &mut cells {
        *cell = match code % 3 {
            0 => Cell::Empty,
            1 => Cell::Marked(Mark::X),
            _ => Cell::Marked(Mark::O),
        };
        code /= 3;
    }
    Board::from_cells(cells)
}

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(board_from_code)
}

#[test]
fn test_no_winner_before_five_alternating_marks() {
    // Boards reachable by alternating play: X count equals O count or one more.
    let reachable_early = all_boards().filter(|board| {
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        (x == o || x == o + 1) && board.occupied_count() < 5
    });

    let mut checked = 0;
    for board in reachable_early {
        assert_eq!(rules::winner(&board), None, "unexpected winner on\n{board}");
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in LINES {
        for mark in Mark::iter() {
            let board = line
                .iter()
                .fold(Board::empty(), |board, position| board.with_mark(*position, mark));
            assert_eq!(rules::winner(&board), Some(mark), "line {line:?}");
            assert_eq!(rules::winning_line(&board), Some((line, mark)));
        }
    }
}

#[test]
fn test_winner_is_total_and_consistent_with_lines() {
    for board in all_boards() {
        let expected = LINES.iter().find_map(|[a, b, c]| {
            let mark = board.cell(*a).mark()?;
            (board.cell(*b).mark() == Some(mark) && board.cell(*c).mark() == Some(mark))
                .then_some(mark)
        });
        assert_eq!(rules::winner(&board), expected);
    }
}

#[test]
fn test_draw_is_distinct_from_ongoing() {
    let drawn = all_boards()
        .filter(|board| rules::is_draw(board))
        .inspect(|board| assert!(board.is_full()))
        .count();
    assert!(drawn > 0);

    let partial = all_boards()
        .filter(|board| !board.is_full())
        .any(|board| rules::is_draw(&board));
    assert!(!partial);
}
