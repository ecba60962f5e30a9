pub mod model;
pub mod util;

pub use model::{CoreError, Coordinate, Day, TimeOfDay};
