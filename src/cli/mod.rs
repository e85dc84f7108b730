pub mod browse;
pub mod insert;
pub mod workspace;
