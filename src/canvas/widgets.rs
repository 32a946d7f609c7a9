pub mod attitude;
pub mod chart;
pub mod cursor;
pub mod heading;
pub mod table;
