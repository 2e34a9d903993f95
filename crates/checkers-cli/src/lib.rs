//! Terminal front end for two-player checkers.

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::{Command, parse_command};
pub use error::{InputError, SessionError};
pub use render::{CLEAR_SCREEN, Render, TerminalRenderer};
pub use session::{Session, SessionConfig, SessionOutcome};
