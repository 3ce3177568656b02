use crate::board::Board;
use crate::bot::{BotInput, calculate_move};
use crate::game_state::{GameState, GameStatus, Mark};
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, GameMode, WinningLine};
use crate::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub human_mark: Mark,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        Ok(())
    }
}

pub struct GameSession {
    config: GameConfig,
    state: GameState,
    rng: SessionRng,
}

impl GameSession {
    pub fn new_game(config: GameConfig) -> Result<Self, String> {
        Self::with_seed(config, rand::random())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, String> {
        config.validate()?;
        let mut session = Self {
            config,
            state: GameState::new(),
            rng: SessionRng::new(seed),
        };
        session.play_bot_turn_if_due();
        Ok(session)
    }

    // In VsComputer mode the bot reply happens inside this call, so control
    // only returns to the caller with the human to move or the game over.
    pub fn submit_move(&mut self, index: usize) -> Result<GameStatus, String> {
        if self.config.mode == GameMode::VsComputer
            && self.state.is_active()
            && self.state.current_mark != self.config.human_mark
        {
            return Err("Not your turn".to_string());
        }

        self.state.place_mark(index)?;

        if self.config.mode == GameMode::VsComputer {
            self.play_bot_turn_if_due();
        }

        Ok(self.state.status)
    }

    pub fn reconfigure(&mut self, config: GameConfig) -> Result<(), String> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.play_bot_turn_if_due();
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.state.last_move
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.state.board)
    }

    fn play_bot_turn_if_due(&mut self) {
        if self.config.mode != GameMode::VsComputer || !self.state.is_active() {
            return;
        }
        if self.state.current_mark == self.config.human_mark {
            return;
        }

        let input = BotInput::from_game_state(&self.state, self.config.human_mark);
        if let Some(index) = calculate_move(self.config.difficulty, &input, &mut self.rng) {
            let _ = self.state.place_mark(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::available_moves;

    fn vs_computer(human_mark: Mark, difficulty: Difficulty) -> GameConfig {
        GameConfig {
            mode: GameMode::VsComputer,
            human_mark,
            difficulty,
        }
    }

    fn occupied(session: &GameSession) -> usize {
        9 - available_moves(session.board()).len()
    }

    #[test]
    fn test_config_with_empty_mark_is_rejected() {
        let config = vs_computer(Mark::Empty, Difficulty::Easy);
        assert!(GameSession::with_seed(config, 1).is_err());
    }

    #[test]
    fn test_two_player_mode_never_invokes_the_bot() {
        let config = GameConfig {
            mode: GameMode::TwoPlayer,
            human_mark: Mark::X,
            difficulty: Difficulty::Hard,
        };
        let mut session = GameSession::with_seed(config, 1).unwrap();
        session.submit_move(0).unwrap();
        assert_eq!(occupied(&session), 1);
        assert_eq!(session.current_mark(), Mark::O);
        session.submit_move(4).unwrap();
        assert_eq!(occupied(&session), 2);
        assert_eq!(session.current_mark(), Mark::X);
    }

    #[test]
    fn test_bot_replies_exactly_once_per_human_move() {
        let mut session =
            GameSession::with_seed(vs_computer(Mark::X, Difficulty::Easy), 11).unwrap();
        let status = session.submit_move(4).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(occupied(&session), 2);
        assert_eq!(session.current_mark(), Mark::X);
    }

    #[test]
    fn test_bot_plays_the_opening_move_when_human_is_o() {
        let session = GameSession::with_seed(vs_computer(Mark::O, Difficulty::Hard), 3).unwrap();
        assert_eq!(occupied(&session), 1);
        assert_eq!(session.current_mark(), Mark::O);
    }

    #[test]
    fn test_submitting_an_occupied_cell_is_a_no_op() {
        let mut session =
            GameSession::with_seed(vs_computer(Mark::X, Difficulty::Easy), 11).unwrap();
        session.submit_move(4).unwrap();
        let before = *session.board();
        assert!(session.submit_move(4).is_err());
        assert_eq!(*session.board(), before);
        assert_eq!(session.current_mark(), Mark::X);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let config = GameConfig {
            mode: GameMode::TwoPlayer,
            human_mark: Mark::X,
            difficulty: Difficulty::Easy,
        };
        let mut session = GameSession::with_seed(config, 1).unwrap();
        for index in [0, 3, 1, 4] {
            session.submit_move(index).unwrap();
        }
        assert_eq!(session.submit_move(2).unwrap(), GameStatus::XWon);
        assert!(!session.is_active());
        assert!(session.submit_move(8).is_err());
    }

    #[test]
    fn test_reconfigure_forces_a_fresh_board() {
        let mut session =
            GameSession::with_seed(vs_computer(Mark::X, Difficulty::Easy), 11).unwrap();
        session.submit_move(0).unwrap();
        assert!(occupied(&session) > 0);

        session
            .reconfigure(vs_computer(Mark::O, Difficulty::Hard))
            .unwrap();
        // fresh board, bot opening already played for the new config
        assert_eq!(occupied(&session), 1);
        assert!(session.is_active());
        assert_eq!(session.current_mark(), Mark::O);
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut session =
            GameSession::with_seed(vs_computer(Mark::X, Difficulty::Medium), 2).unwrap();
        session.submit_move(0).unwrap();
        session.reset();
        assert_eq!(occupied(&session), 0);
        assert_eq!(session.config().difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_winning_line_is_reported_after_a_win() {
        let config = GameConfig {
            mode: GameMode::TwoPlayer,
            human_mark: Mark::X,
            difficulty: Difficulty::Easy,
        };
        let mut session = GameSession::with_seed(config, 1).unwrap();
        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).unwrap();
        }
        let line = session.winning_line().unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_full_game_against_hard_bot_ends_without_human_win() {
        // The human mirrors the bot with the blocking strategy; hard play
        // must never lose from the bot's side.
        let mut session =
            GameSession::with_seed(vs_computer(Mark::X, Difficulty::Hard), 17).unwrap();
        let mut rng = SessionRng::new(17);
        while session.is_active() {
            let input = BotInput {
                board: *session.board(),
                bot_mark: Mark::X,
                human_mark: Mark::O,
            };
            let index = calculate_move(Difficulty::Medium, &input, &mut rng).unwrap();
            session.submit_move(index).unwrap();
        }
        assert_ne!(session.status(), GameStatus::XWon);
    }
}
