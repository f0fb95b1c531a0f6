pub mod games;
pub mod standings;
