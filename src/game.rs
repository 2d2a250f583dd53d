use log::{debug, info};

use crate::ai::search::AlphaBetaSelector;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::controller::Controller;
use crate::error::GameError;
use crate::moves::Move;
use crate::types::{GameResult, GameState, Outcome, Position, Side};

/// Human side.
pub const HUMAN: Side = Side::Light;
/// Computer side.
pub const OPPONENT: Side = Side::Dark;

/// Chooses dark's reply on a board. `depth` is the search depth in plies.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, depth: u8) -> Option<Move>;
}

/// One session between a human (light) and the computer (dark).
pub struct GameInstance {
    controller: Controller,
    config: EngineConfig,
    outcome: Outcome,
    last_move: Option<Move>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(config: EngineConfig, selector: Box<dyn MoveSelector>) -> Result<Self, GameError> {
        config.validate()?;
        let controller = Controller::new();
        Ok(Self {
            outcome: controller.terminal(),
            controller,
            config,
            last_move: None,
            selector,
        })
    }

    pub fn new_with_default_selector(config: EngineConfig) -> Result<Self, GameError> {
        Self::new(config, Box::new(AlphaBetaSelector))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board_snapshot(&self) -> Board {
        *self.controller.board()
    }

    pub fn side_to_move(&self) -> Side {
        self.controller.side_to_move()
    }

    pub fn terminal(&self) -> Outcome {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.outcome.is_over() {
            return Vec::new();
        }
        self.controller.legal_moves(self.side_to_move())
    }

    /// Legal moves of the piece on `(row, col)`, empty unless it belongs to
    /// the side to move.
    pub fn legal_moves_from(&self, row: u8, col: u8) -> Vec<Move> {
        let (row, col) = (row as i32, col as i32);
        match self.controller.board().get(row, col) {
            Some(piece) if !self.outcome.is_over() && piece.side() == self.side_to_move() => {
                self.controller.legal_moves_from(row, col)
            }
            _ => Vec::new(),
        }
    }

    /// Plays the human move `(start_row, start_col) -> (end_row, end_col)`.
    pub fn place(
        &mut self,
        start_row: u8,
        start_col: u8,
        end_row: u8,
        end_col: u8,
    ) -> Result<(), GameError> {
        self.ensure_turn(HUMAN)?;
        let requested = Move::new(
            Position::new(start_row, start_col),
            Position::new(end_row, end_col),
        );
        self.apply_move(requested, HUMAN)?;
        Ok(())
    }

    /// Dark's preferred reply in the current position. Does not play it.
    pub fn best_opponent_move(&self) -> Option<Move> {
        self.selector
            .select_move(self.controller.board(), self.config.search_depth)
    }

    /// Plays dark's reply. When the selector finds nothing the game ends as
    /// a light win and `Ok(None)` is returned.
    pub fn do_ai_move(&mut self) -> Result<Option<Move>, GameError> {
        self.ensure_turn(OPPONENT)?;

        let Some(selected) = self.best_opponent_move() else {
            self.finish(Outcome::LightWins);
            return Ok(None);
        };

        let executed = self.apply_move(selected, OPPONENT)?;
        Ok(Some(executed))
    }

    pub fn to_game_state(&self) -> GameState {
        let board = self.controller.board();
        let (light_count, dark_count) = board.count();
        GameState {
            board: board.to_array().to_vec(),
            side_to_move: self.side_to_move(),
            light_count,
            dark_count,
            outcome: self.outcome,
            last_move: self.last_move,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (light_count, dark_count) = self.controller.board().count();
        GameResult {
            winner: self.outcome.winner(),
            light_count,
            dark_count,
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver(self.outcome));
        }
        if self.side_to_move() != side {
            return Err(GameError::WrongTurn(side));
        }
        Ok(())
    }

    /// Resolves `requested` against the legal moves of `side` and plays it.
    fn apply_move(&mut self, requested: Move, side: Side) -> Result<Move, GameError> {
        let illegal = || {
            if side == HUMAN {
                GameError::IllegalMove(requested)
            } else {
                GameError::IllegalAiMove(requested)
            }
        };

        let (row, col) = (requested.start.row as i32, requested.start.col as i32);
        if self.controller.board().get(row, col).map(|p| p.side()) != Some(side) {
            return Err(illegal());
        }

        let executed = self
            .controller
            .legal_moves_from(row, col)
            .into_iter()
            .find(|m| m.end == requested.end)
            .ok_or_else(illegal)?;

        if !self.controller.apply(&executed) {
            return Err(illegal());
        }
        debug!("{side} played {executed}");

        self.last_move = Some(executed);
        let outcome = self.controller.terminal();
        if outcome.is_over() {
            self.finish(outcome);
        }
        Ok(executed)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        let (light_count, dark_count) = self.controller.board().count();
        info!(
            "game over: {:?} (code {}), light {light_count} dark {dark_count}",
            outcome,
            outcome.code()
        );
    }

    #[cfg(test)]
    fn set_position_for_test(&mut self, board: Board, side_to_move: Side) {
        self.controller = Controller::from_position(board, side_to_move);
        self.outcome = self.controller.terminal();
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    struct FixedMoveSelector {
        mv: Option<Move>,
    }

    impl MoveSelector for FixedMoveSelector {
        fn select_move(&self, _board: &Board, _depth: u8) -> Option<Move> {
            self.mv
        }
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn fixed(mv: Option<Move>) -> GameInstance {
        GameInstance::new(EngineConfig::default(), Box::new(FixedMoveSelector { mv })).unwrap()
    }

    #[test]
    fn initial_state_is_correct() {
        let game = GameInstance::new_with_default_selector(EngineConfig::default()).unwrap();
        let state = game.to_game_state();

        assert_eq!(state.side_to_move, Side::Light);
        assert_eq!(state.light_count, 12);
        assert_eq!(state.dark_count, 12);
        assert_eq!(state.outcome, Outcome::Ongoing);
        assert_eq!(state.last_move, None);
        assert_eq!(state.board.len(), 64);
        assert_eq!(game.legal_moves().len(), 7);
    }

    #[test]
    fn invalid_depth_is_rejected() {
        let config = EngineConfig { search_depth: 0 };

        assert!(matches!(
            GameInstance::new_with_default_selector(config),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn illegal_player_move_returns_error() {
        let mut game = fixed(None);
        let err = game.place(5, 0, 3, 2).unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove(Move::new(pos(5, 0), pos(3, 2)))
        );
        assert_eq!(game.side_to_move(), Side::Light);
    }

    #[test]
    fn human_cannot_move_dark_pieces() {
        let mut game = fixed(None);

        assert!(matches!(
            game.place(2, 1, 3, 0),
            Err(GameError::IllegalMove(_))
        ));
        assert!(game.legal_moves_from(2, 1).is_empty());
        assert_eq!(game.legal_moves_from(5, 2).len(), 2);
    }

    #[test]
    fn turns_are_enforced() {
        let mut game = fixed(None);

        assert_eq!(game.do_ai_move(), Err(GameError::WrongTurn(Side::Dark)));

        game.place(5, 0, 4, 1).unwrap();

        assert_eq!(
            game.place(5, 2, 4, 3),
            Err(GameError::WrongTurn(Side::Light))
        );
    }

    #[test]
    fn ai_reply_is_played_and_recorded() {
        let reply = Move::new(pos(2, 1), pos(3, 2));
        let mut game = fixed(Some(reply));

        game.place(5, 2, 4, 3).unwrap();
        let played = game.do_ai_move().unwrap();

        assert_eq!(played, Some(reply));
        assert_eq!(game.last_move(), Some(reply));
        assert_eq!(game.side_to_move(), Side::Light);
        assert!(game.legal_moves().iter().all(Move::is_capture));
    }

    #[test]
    fn illegal_ai_move_is_rejected() {
        let bogus = Move::new(pos(2, 1), pos(4, 3));
        let mut game = fixed(Some(bogus));
        game.place(5, 0, 4, 1).unwrap();
        let before = game.board_snapshot();

        assert_eq!(game.do_ai_move(), Err(GameError::IllegalAiMove(bogus)));
        assert_eq!(game.board_snapshot(), before);
        assert_eq!(game.side_to_move(), Side::Dark);
    }

    #[test]
    fn selector_without_move_forfeits_to_light() {
        let mut game = fixed(None);
        game.place(5, 0, 4, 1).unwrap();

        assert_eq!(game.do_ai_move(), Ok(None));
        assert_eq!(game.terminal(), Outcome::LightWins);
        assert_eq!(game.to_game_result().winner, Some(Side::Light));
        assert!(matches!(
            game.place(5, 2, 4, 3),
            Err(GameError::GameOver(Outcome::LightWins))
        ));
    }

    #[test]
    fn capturing_the_last_piece_ends_the_game() {
        let mut game = fixed(None);
        let mut board = Board::empty();
        board.set(3, 2, Some(Piece::man(Side::Light)));
        board.set(2, 1, Some(Piece::man(Side::Dark)));
        game.set_position_for_test(board, Side::Light);

        game.place(3, 2, 1, 0).unwrap();

        let result = game.to_game_result();
        assert_eq!(game.terminal(), Outcome::LightWins);
        assert_eq!(result.winner, Some(Side::Light));
        assert_eq!((result.light_count, result.dark_count), (1, 0));
        assert_eq!(
            game.last_move(),
            Some(Move::capture(pos(3, 2), pos(1, 0), pos(2, 1)))
        );
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn default_selector_plays_a_legal_reply() {
        let mut game = GameInstance::new_with_default_selector(EngineConfig::default()).unwrap();
        game.place(5, 0, 4, 1).unwrap();
        let dark_moves = game.legal_moves();

        let played = game.do_ai_move().unwrap().unwrap();

        assert!(dark_moves.contains(&played));
        assert_eq!(game.side_to_move(), Side::Light);
    }
}
