pub mod offset;

pub use offset::{days_until_departure, parse_departure_date, DayOffsetMode, MILLIS_PER_DAY};
