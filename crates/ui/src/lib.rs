pub mod intent;
pub mod screen;
pub mod terminal;
pub mod vm;

pub use intent::Intent;
pub use screen::Screen;
pub use terminal::TerminalApp;
