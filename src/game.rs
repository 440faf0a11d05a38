//! One Minesweeper session: a board plus turn count, flag quota, timing and
//! the Active/Won/Lost/Quit state machine.

use std::io::{self, BufRead, Write};
use std::time::SystemTime;

use rand::Rng;

use crate::board::Board;
use crate::command::{self, Command};
use crate::common::{BoardError, Flow};
use crate::processor;
use crate::render::BoardView;
use crate::user::User;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
    Quit,
}

/// Core game logic holding the board and session metadata.
pub struct Game {
    board: Board,
    turns: u32,
    flags_needed: usize,
    start_time: Option<SystemTime>,
    end_time: Option<SystemTime>,
    status: GameStatus,
}

impl Game {
    /// Build a `width × height` board and scatter `mine_count` mines on it.
    ///
    /// Collisions are resampled, so every mine lands on a distinct cell.
    pub fn build<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut board = Board::new(width, height)?;
        let cells = width * height;
        if mine_count > cells {
            return Err(BoardError::TooManyMines {
                requested: mine_count,
                cells,
            });
        }

        let mut placed = 0;
        while placed < mine_count {
            let row = rng.random_range(0..height);
            let col = rng.random_range(0..width);
            match board.place_mine(row, col) {
                Ok(()) => placed += 1,
                Err(BoardError::DuplicateMine) => continue,
                Err(e) => return Err(e),
            }
        }
        log::debug!("placed {} mines on a {}x{} board", placed, width, height);

        Ok(Self {
            board,
            turns: 0,
            flags_needed: mine_count,
            start_time: None,
            end_time: None,
            status: GameStatus::Active,
        })
    }

    /// Wrap an already prepared board, e.g. one with hand-placed mines.
    pub fn from_board(board: Board) -> Self {
        let flags_needed = board.mine_total();
        Self {
            board,
            turns: 0,
            flags_needed,
            start_time: None,
            end_time: None,
            status: GameStatus::Active,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once the game left the `Active` state.
    pub fn is_ended(&self) -> bool {
        self.status != GameStatus::Active
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Flags that must be on the board for a win.
    pub fn flags_needed(&self) -> usize {
        self.flags_needed
    }

    pub fn set_flags_needed(&mut self, flags: usize) {
        self.flags_needed = flags;
    }

    pub fn start_time(&self) -> Option<SystemTime> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<SystemTime> {
        self.end_time
    }

    /// Stamp the start time with the current clock.
    pub fn mark_start(&mut self) {
        self.start_time = Some(SystemTime::now());
    }

    /// Stamp the end time with the current clock.
    pub fn mark_end(&mut self) {
        self.end_time = Some(SystemTime::now());
    }

    /// Whole seconds between start and end, once both are stamped.
    pub fn score(&self) -> Option<u64> {
        let elapsed = self.end_time?.duration_since(self.start_time?).ok()?;
        Some(elapsed.as_secs())
    }

    pub(crate) fn lose(&mut self) {
        if self.status == GameStatus::Active {
            self.mark_end();
            self.status = GameStatus::Lost;
        }
    }

    pub(crate) fn quit(&mut self) {
        if self.status == GameStatus::Active {
            self.status = GameStatus::Quit;
        }
    }

    /// Move to `Won` when every mine is flagged and the flag quota is met.
    ///
    /// Returns `true` only on the transition itself.
    pub fn check_win(&mut self) -> bool {
        if self.status == GameStatus::Active
            && self.board.mines_remaining() == 0
            && self.board.flag_count() == self.flags_needed
        {
            self.mark_end();
            self.status = GameStatus::Won;
            log::info!("game won after {} turns", self.turns);
            return true;
        }
        false
    }

    /// Run one command, count the turn and check for a win.
    ///
    /// An ended game ignores further commands.
    pub fn apply(&mut self, command: Command) -> Result<Flow, BoardError> {
        if self.is_ended() {
            log::debug!("ignoring {:?}, game is over", command);
            return Ok(Flow::Continue);
        }
        let result = processor::execute(command, self);
        if command.consumes_turn() {
            self.turns += 1;
        }
        self.check_win();
        result
    }

    /// Parse and run one line of input, reporting problems to `out`.
    ///
    /// Unparseable lines and `help` do not cost a turn.
    pub fn take_turn<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match command::parse(line) {
            Err(e) => {
                writeln!(out, "\n{}", e)?;
                Ok(Flow::Continue)
            }
            Ok(Command::Help) => {
                write!(out, "{}", processor::help())?;
                Ok(Flow::Continue)
            }
            Ok(cmd) => match self.apply(cmd) {
                Ok(flow) => Ok(flow),
                Err(e) => {
                    writeln!(out, "\n{}", e)?;
                    Ok(Flow::Continue)
                }
            },
        }
    }

    /// Play until the game ends, crediting `user` with the score on a win.
    ///
    /// End of input is treated like `close`.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        user: &mut User,
    ) -> io::Result<Flow> {
        self.mark_start();
        let mut flow = Flow::Continue;
        while !self.is_ended() {
            writeln!(out)?;
            writeln!(out, "Turn: {}", self.turns)?;
            writeln!(out, "{}", BoardView::new(&self.board))?;
            self.board.set_no_fog(false);
            write!(out, "\nEnter a command: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                log::info!("input closed, leaving game");
                flow = processor::close(self);
                break;
            }
            flow = self.take_turn(&line, out)?;
        }

        match self.status {
            GameStatus::Won => {
                let score = self.score().unwrap_or(0);
                print_banner(out, "YOU WIN")?;
                writeln!(out, "Score: {}", score)?;
                user.add_score(score);
            }
            GameStatus::Lost => {
                print_banner(out, "YOU LOSE")?;
                writeln!(out, "{}", BoardView::new(&self.board).reveal_mines(true))?;
            }
            GameStatus::Active | GameStatus::Quit => {}
        }
        Ok(flow)
    }
}

fn print_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════╗")?;
    writeln!(out, "║{:^30}║", title)?;
    writeln!(out, "╚══════════════════════════════╝")
}
