pub mod contacts;
pub mod firing;
pub mod flight;
pub mod formation;
pub mod game_over;
pub mod input;

pub use contacts::*;
pub use firing::*;
pub use flight::*;
pub use formation::*;
pub use game_over::*;
pub use input::*;
