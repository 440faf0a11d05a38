//! Outer program loop: pick a user, then build and play games until the
//! player declines or closes the program.
//!
//! All state that outlives one game (users, active user, RNG, limits and the
//! running flag) lives on [`Session`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use rand::rngs::SmallRng;

use crate::common::Flow;
use crate::config::Limits;
use crate::game::{Game, GameStatus};
use crate::user::{User, UserStore};

pub struct Session<R, W> {
    input: R,
    out: W,
    users: UserStore,
    store_path: Option<PathBuf>,
    active_user: Option<String>,
    limits: Limits,
    rng: SmallRng,
    running: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, users: UserStore, limits: Limits, rng: SmallRng) -> Self {
        Self {
            input,
            out,
            users,
            store_path: None,
            active_user: None,
            limits,
            rng,
            running: true,
        }
    }

    /// Persist the user store to `path` when the session ends.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn active_user(&self) -> Option<&str> {
        self.active_user.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Consume the session, handing back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_users(&mut self) -> anyhow::Result<()> {
        if self.users.is_empty() {
            writeln!(self.out, "No users found. Please add a user.")?;
            return Ok(());
        }
        writeln!(self.out, "User list:")?;
        for (i, user) in self.users.iter().enumerate() {
            writeln!(
                self.out,
                "{}. {} (score: {})",
                i + 1,
                user.name(),
                user.total_score()
            )?;
        }
        Ok(())
    }

    /// Ask for a name and make it the active user. Returns `false` on end of
    /// input.
    pub fn select_user(&mut self) -> anyhow::Result<bool> {
        self.print_users()?;
        loop {
            write!(
                self.out,
                "Please choose a user by name, or add a new user by typing a new name: "
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            let Some(name) = line.split_whitespace().next() else {
                continue;
            };
            let (user, created) = self.users.choose_or_add(name);
            let name = user.name().to_string();
            if created {
                writeln!(self.out, "New user {} added.", name)?;
            } else {
                writeln!(self.out, "User {} chosen.", name)?;
            }
            log::info!("active user: {}", name);
            self.active_user = Some(name);
            return Ok(true);
        }
    }

    /// Re-prompt until `accept` holds. Non-numeric input reads as 0.
    fn prompt_number(
        &mut self,
        prompt: &str,
        what: &str,
        accept: impl Fn(usize) -> bool,
    ) -> anyhow::Result<Option<usize>> {
        loop {
            write!(self.out, "\n{}", prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let value = line.trim().parse::<usize>().unwrap_or(0);
            if accept(value) {
                return Ok(Some(value));
            }
            writeln!(self.out, "\nInvalid {}, try again", what)?;
        }
    }

    /// Offer a new game and play it.
    ///
    /// Returns [`Flow::Exit`] when the player declines, closes the program or
    /// input runs out.
    pub fn play_round(&mut self) -> anyhow::Result<Flow> {
        write!(self.out, "\nStart New Game? Y/N: ")?;
        let Some(answer) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        if answer.trim_start().starts_with(['n', 'N']) {
            return Ok(Flow::Exit);
        }

        let limits = self.limits;
        let Some(height) = self.prompt_number(
            &format!("Enter Height (Max {}): ", limits.max_height),
            "Height",
            |h| limits.height_ok(h),
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(width) = self.prompt_number(
            &format!("Enter Width (Max {}): ", limits.max_width),
            "Width",
            |w| limits.width_ok(w),
        )?
        else {
            return Ok(Flow::Exit);
        };
        let cap = limits.mine_cap(height, width);
        let Some(mines) = self.prompt_number(
            &format!("Enter Mines (1 to {}): ", cap.saturating_sub(1)),
            "Number of Mines",
            |m| limits.mines_ok(height, width, m),
        )?
        else {
            return Ok(Flow::Exit);
        };

        let mut game = match Game::build(width, height, mines, &mut self.rng) {
            Ok(game) => game,
            Err(e) => {
                writeln!(self.out, "\n{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        log::info!("new game: {}x{} with {} mines", width, height, mines);

        let mut guest = User::new("guest");
        let user = match self.active_user.as_deref() {
            Some(name) => self.users.choose(name).unwrap_or(&mut guest),
            None => &mut guest,
        };
        let flow = game.play(&mut self.input, &mut self.out, user)?;
        log::info!(
            "game ended: {:?} after {} turns",
            game.status(),
            game.turns()
        );
        if game.status() == GameStatus::Won {
            if let Some(name) = self.active_user.as_deref() {
                if let Some(user) = self.users.get(name) {
                    writeln!(self.out, "Total score for {}: {}", name, user.total_score())?;
                }
            }
        }
        Ok(flow)
    }

    /// Write the user store if a path was configured.
    pub fn save(&self) -> anyhow::Result<()> {
        match &self.store_path {
            Some(path) => self.users.save(path),
            None => Ok(()),
        }
    }

    /// Run the whole program: welcome, user selection, games, save.
    pub fn run(&mut self) -> anyhow::Result<()> {
        print_welcome(&mut self.out)?;
        if !self.select_user()? {
            self.running = false;
        }
        while self.running {
            if self.play_round()? == Flow::Exit {
                self.running = false;
            }
        }
        writeln!(self.out)?;
        self.out.flush()?;
        self.save()
    }
}

fn print_welcome<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "╔══════════════════════════════╗")?;
    writeln!(out, "║{:^30}║", "MINESWEEPER")?;
    writeln!(out, "║{:^30}║", concat!("v", env!("CARGO_PKG_VERSION")))?;
    writeln!(out, "╚══════════════════════════════╝")
}
