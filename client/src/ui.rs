use tictactoe_engine::{Board, GameSession, GameStatus, Mark, WinningLine};

pub fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::X => 'X',
        Mark::O => 'O',
        Mark::Empty => ' ',
    }
}

pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| cell_text(board, row * 3 + col, winning_line))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn cell_text(board: &Board, index: usize, winning_line: Option<&WinningLine>) -> String {
    let mark = board[index];
    if mark == Mark::Empty {
        // empty cells show the digit used to claim them
        return format!(" {} ", index + 1);
    }
    if winning_line.is_some_and(|line| line.cells.contains(&index)) {
        format!("[{}]", mark_char(mark))
    } else {
        format!(" {} ", mark_char(mark))
    }
}

pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => format!("{}'s turn", mark_char(session.current_mark())),
        GameStatus::XWon => "X has won!".to_string(),
        GameStatus::OWon => "O has won!".to_string(),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
    }
}
