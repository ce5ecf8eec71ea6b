mod numeric_date;

pub use numeric_date::*;
