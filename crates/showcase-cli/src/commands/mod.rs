pub mod cases;
pub mod chat;
pub mod prompt;
pub mod utils;
