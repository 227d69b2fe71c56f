pub mod constants;
pub mod seed;
