//! Interactive front end: login gate, menu session, and output rendering.

pub mod app;
pub mod args;
pub mod console;
pub mod input;
pub mod login;
pub mod menu;
pub mod render;
pub mod session;

pub use app::RunOutcome;
pub use args::CliArgs;
pub use console::Console;
pub use session::{Session, SessionEnd};
