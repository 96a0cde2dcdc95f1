//! Core abstractions shared across the application
//!
//! - `accessor`: the narrow read interface every algorithm runs against
//! - `memory`: an in-memory repository used by the unit tests

pub mod accessor;
