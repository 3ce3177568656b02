use crate::board::Board;
use crate::game_state::{GameStatus, Mark};
use crate::types::WinningLine;

// Rows, columns, diagonals. The scan order is fixed: the first matching
// line wins, and the blocking strategy relies on the same order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for cells in WIN_LINES {
        let [a, b, c] = cells;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(mark, cells));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return match winner {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.iter().all(|&cell| cell != Mark::Empty) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_board;

    fn board_from(marks: [(usize, Mark); 9]) -> Board {
        let mut board = empty_board();
        for (index, mark) in marks {
            board[index] = mark;
        }
        board
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&empty_board()), GameStatus::InProgress);
    }

    #[test]
    fn test_row_win_is_detected_with_line() {
        let mut board = empty_board();
        board[3] = Mark::O;
        board[4] = Mark::O;
        board[5] = Mark::O;
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [3, 4, 5]);
        assert_eq!(evaluate(&board), GameStatus::OWon);
    }

    #[test]
    fn test_column_and_diagonal_wins_are_detected() {
        let mut column = empty_board();
        column[1] = Mark::X;
        column[4] = Mark::X;
        column[7] = Mark::X;
        assert_eq!(check_win(&column), Some(Mark::X));

        let mut diagonal = empty_board();
        diagonal[2] = Mark::O;
        diagonal[4] = Mark::O;
        diagonal[6] = Mark::O;
        assert_eq!(check_win(&diagonal), Some(Mark::O));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X / X O O / O X X
        let board = board_from([
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[4] = Mark::O;
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn test_first_matching_line_wins_on_constructed_boards() {
        // Not reachable through legal play, but must not crash and must
        // resolve to the earliest line in scan order.
        let mut board = empty_board();
        for index in [0, 1, 2, 3, 4, 5] {
            board[index] = Mark::X;
        }
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells, [0, 1, 2]);
    }
}
