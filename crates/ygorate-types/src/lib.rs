pub mod card;
mod util;

pub use card::*;
pub use util::*;
