pub mod board;
pub mod layout;
pub mod types;

pub use board::*;
pub use types::*;
