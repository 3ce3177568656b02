mod board;
mod bot;
mod game_state;
pub mod logger;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, available_moves, empty_board, is_occupied, place};
pub use bot::{BotInput, ScoredMove, calculate_minimax_move, calculate_move, find_blocking_move};
pub use game_state::{GameState, GameStatus, Mark};
pub use session::{GameConfig, GameSession};
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameMode, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, evaluate};
