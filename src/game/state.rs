use crate::constants::{CELL_COUNT, WIN_LINES};
use crate::game::board::{Board, Cell, Mark};
use crate::game::player::{Player, PlayerInfo};

/// Outcome of the current match as exposed to the presentation layer.
///
/// `is_game_over == false` always comes with `winner == None`; a finished
/// match carries the winner, or `None` for a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub is_game_over: bool,
    pub winner: Option<PlayerInfo>,
}

/// The match engine: owns the board, both players, the turn holder, and the
/// outcome flags. All invalid calls are silent no-ops; the only signals are
/// the query methods.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: Option<[Player; 2]>,
    current: Option<Mark>,
    winner: Option<Mark>,
    game_over: bool,
}

impl Game {
    /// Creates an engine with no match running. `new_game` starts the first
    /// one.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: None,
            winner: None,
            game_over: false,
        }
    }

    /// Starts a brand-new match on an empty board. The first named player
    /// holds `X` and the opening turn. Any previous match state, scores
    /// included, is discarded.
    pub fn new_game(&mut self, name_a: &str, name_b: &str) {
        self.players = Some([Player::new(name_a, Mark::X), Player::new(name_b, Mark::O)]);
        self.current = Some(Mark::X);
        self.winner = None;
        self.game_over = false;
        self.board.reset();
    }

    /// Restarts the round with the same players and their accumulated
    /// scores. Ignored if no match has ever been started.
    pub fn rematch(&mut self) {
        if self.players.is_none() {
            return;
        }
        self.current = Some(Mark::X);
        self.winner = None;
        self.game_over = false;
        self.board.reset();
    }

    /// Plays the current player's mark into `index`. A call before the first
    /// match, after the match is over, or onto a rejected cell (occupied or
    /// out of range) changes nothing — in particular the turn does not
    /// advance.
    pub fn play(&mut self, index: usize) {
        let mark = match self.current {
            Some(mark) => mark,
            None => return,
        };
        if self.game_over {
            return;
        }
        if !self.board.set_cell(index, mark) {
            return;
        }

        self.check_outcome();
        if !self.game_over {
            self.current = Some(mark.opponent());
        }
    }

    // Scans the win lines in fixed order; the first complete line decides
    // the match. The draw check runs only when no line matched, so a move
    // that fills the board while completing a line counts as a win.
    fn check_outcome(&mut self) {
        let cells = self.board.state();

        for [a, b, c] in WIN_LINES {
            if let Cell::Marked(mark) = cells[a] {
                if cells[b] == cells[a] && cells[c] == cells[a] {
                    self.winner = Some(mark);
                    if let Some(player) = self.player_mut(mark) {
                        player.award_point();
                    }
                    self.game_over = true;
                    return;
                }
            }
        }

        if cells.iter().all(|&cell| cell != Cell::Empty) {
            self.game_over = true;
        }
    }

    /// Snapshots of player A and player B, in that order, or `None` before
    /// the first match.
    pub fn players_info(&self) -> Option<[PlayerInfo; 2]> {
        self.players.as_ref().map(|[a, b]| [a.info(), b.info()])
    }

    /// Snapshot of the turn holder, or `None` before the first match. After
    /// a terminal move this still names the player who made it.
    pub fn current_player(&self) -> Option<PlayerInfo> {
        let mark = self.current?;
        self.player(mark).map(Player::info)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            is_game_over: self.game_over,
            winner: self.winner.and_then(|mark| self.player(mark)).map(Player::info),
        }
    }

    /// Copy of the board cells, indexed 0..=8.
    pub fn board_state(&self) -> [Cell; CELL_COUNT] {
        self.board.state()
    }

    fn player(&self, mark: Mark) -> Option<&Player> {
        self.players
            .as_ref()
            .and_then(|players| players.iter().find(|p| p.mark() == mark))
    }

    fn player_mut(&mut self, mark: Mark) -> Option<&mut Player> {
        self.players
            .as_mut()
            .and_then(|players| players.iter_mut().find(|p| p.mark() == mark))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
