pub mod range;

pub use range::{fraction_of, interpolated};
