// Analyzer module: moving averages and price sample derivation.

pub mod moving_average;
pub mod sample;

pub use sample::derive_sample;
