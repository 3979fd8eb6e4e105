pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod terminal;
pub mod theme;
