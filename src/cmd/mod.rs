pub mod caesar;
pub mod score;
pub mod solve;
