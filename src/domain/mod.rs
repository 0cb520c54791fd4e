pub mod comparison;
pub mod savings;
pub mod sunlight;
pub mod time;
pub mod weather;

pub use comparison::*;
pub use savings::*;
pub use sunlight::*;
pub use time::*;
pub use weather::*;
