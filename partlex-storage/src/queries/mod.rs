//! Queries over the `car_parts` table.

pub mod parts;
pub mod stats;
