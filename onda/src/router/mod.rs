pub mod info;
pub mod sma;
