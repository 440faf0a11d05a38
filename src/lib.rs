#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod autoplay;
mod board;
pub mod command;
mod common;
mod config;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod processor;
#[cfg(feature = "std")]
mod render;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod user;
pub mod prelude;

pub use autoplay::*;
pub use board::*;
pub use command::{Command, ParseError};
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use processor::RevealOutcome;
#[cfg(feature = "std")]
pub use render::*;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use user::*;
