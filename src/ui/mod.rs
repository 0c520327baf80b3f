//! Terminal output for the modbuild binary

pub mod console;
pub mod context;
pub mod terminal;
pub mod text;
pub mod theme;

pub use console::ConsoleEventSink;
pub use context::UiContext;
