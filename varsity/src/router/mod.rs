pub mod enrich;
pub mod games;
pub mod standings;
