mod coordinate;
mod core_error;
mod day;
mod time_of_day;

pub use coordinate::Coordinate;
pub use core_error::CoreError;
pub use day::Day;
pub use time_of_day::{TimeOfDay, TIME_OF_DAY_FORMAT};
