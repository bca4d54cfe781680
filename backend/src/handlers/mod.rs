pub mod chat;
pub mod ping;

pub use chat::*;
pub use ping::*;
