pub mod chat;
pub mod emotion;
pub mod health;

pub use chat::*;
pub use emotion::*;
pub use health::*;
