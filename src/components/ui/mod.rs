pub mod button;
pub mod card;
pub mod row;

pub use button::*;
pub use card::*;
pub use row::*;
