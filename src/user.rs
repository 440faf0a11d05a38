//! Player profiles and their flat-file store.
//!
//! The file holds one `<name> <score>` line per user, where the score is a
//! signed integer. Order is preserved from load to save, and lines that do
//! not parse are carried through a save untouched.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    total_score: i64,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds accumulated over every game this user won.
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn add_score(&mut self, score: u64) {
        let score = i64::try_from(score).unwrap_or(i64::MAX);
        self.total_score = self.total_score.saturating_add(score);
    }
}

/// Ordered collection of users, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    users: Vec<User>,
    unparsed: Vec<String>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse store contents.
    ///
    /// Malformed lines are skipped with a warning and kept verbatim so that
    /// [`UserStore::to_file_string`] writes them back. Later duplicates of a
    /// name are dropped.
    pub fn parse(text: &str) -> Self {
        let mut store = Self::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let parsed = match (fields.next(), fields.next().map(str::parse::<i64>)) {
                (Some(name), Some(Ok(score))) => Some((name, score)),
                _ => None,
            };
            let Some((name, score)) = parsed else {
                log::warn!("user store line {} is malformed, keeping it as is", lineno + 1);
                store.unparsed.push(line.to_string());
                continue;
            };
            if store.get(name).is_some() {
                log::warn!("duplicate user {} on line {}", name, lineno + 1);
                continue;
            }
            store.users.push(User {
                name: name.to_string(),
                total_score: score,
            });
        }
        store
    }

    /// Lines that could not be read as a user.
    pub fn unparsed(&self) -> &[String] {
        &self.unparsed
    }

    /// Load from `path`; a missing file yields an empty store.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let store = Self::parse(&text);
                log::info!("loaded {} user(s) from {}", store.len(), path.display());
                Ok(store)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e).with_context(|| format!("reading user store {}", path.display())),
        }
    }

    /// Rewrite `path` with every user.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_file_string())
            .with_context(|| format!("writing user store {}", path.display()))?;
        log::info!("saved {} user(s) to {}", self.len(), path.display());
        Ok(())
    }

    pub fn to_file_string(&self) -> String {
        let mut out = String::new();
        for user in &self.users {
            let _ = writeln!(out, "{} {}", user.name, user.total_score);
        }
        for line in &self.unparsed {
            let _ = writeln!(out, "{}", line);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn get(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Look up a user for play.
    pub fn choose(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.name == name)
    }

    /// Add a new user with a zero score. Returns `None` if the name is taken.
    pub fn add(&mut self, name: &str) -> Option<&mut User> {
        if self.get(name).is_some() {
            return None;
        }
        self.users.push(User::new(name));
        self.users.last_mut()
    }

    /// Choose `name`, creating it first if needed. The flag tells whether
    /// the user was created.
    pub fn choose_or_add(&mut self, name: &str) -> (&mut User, bool) {
        match self.users.iter().position(|u| u.name == name) {
            Some(i) => (&mut self.users[i], false),
            None => {
                self.users.push(User::new(name));
                let last = self.users.len() - 1;
                (&mut self.users[last], true)
            }
        }
    }
}
