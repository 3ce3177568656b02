use crate::board::{Board, available_moves};
use crate::game_state::{GameState, Mark};
use crate::session_rng::SessionRng;
use crate::types::Difficulty;
use crate::win_detector::{WIN_LINES, check_win};

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub human_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState, human_mark: Mark) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
            human_mark,
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    debug_assert!(
        !available_moves(&input.board).is_empty(),
        "bot asked to move on a full board"
    );

    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => {
            find_blocking_move(&input.board, input.human_mark)
                .or_else(|| calculate_random_move(input, rng))
        }
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let moves = available_moves(&input.board);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

pub fn find_blocking_move(board: &Board, mark: Mark) -> Option<usize> {
    for [a, b, c] in WIN_LINES {
        if board[a] == mark && board[b] == mark && board[c] == Mark::Empty {
            return Some(c);
        }
        if board[a] == mark && board[c] == mark && board[b] == Mark::Empty {
            return Some(b);
        }
        if board[b] == mark && board[c] == mark && board[a] == Mark::Empty {
            return Some(a);
        }
    }
    None
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut board = input.board;
    minimax(&mut board, input.bot_mark, input.bot_mark, input.human_mark).index
}

#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub index: Option<usize>,
    pub score: i32,
}

// Exhaustive search over the full game tree. The board is scratch space:
// every hypothetical mark is removed before returning. Ties resolve to the
// first candidate found, i.e. the lowest index.
fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark, human_mark: Mark) -> ScoredMove {
    if let Some(winner) = check_win(board) {
        let score = if winner == bot_mark { 10 } else { -10 };
        return ScoredMove { index: None, score };
    }

    let moves = available_moves(board);
    if moves.is_empty() {
        return ScoredMove {
            index: None,
            score: 0,
        };
    }

    let next_to_move = if to_move == bot_mark {
        human_mark
    } else {
        bot_mark
    };

    let mut best_index = None;
    let mut best_score = if to_move == bot_mark {
        i32::MIN
    } else {
        i32::MAX
    };

    for index in moves {
        board[index] = to_move;
        let score = minimax(board, next_to_move, bot_mark, human_mark).score;
        board[index] = Mark::Empty;

        let better = if to_move == bot_mark {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_index = Some(index);
        }
    }

    ScoredMove {
        index: best_index,
        score: best_score,
    }
}
