pub mod documents;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod paths;
pub mod pool;
