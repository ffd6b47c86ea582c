pub mod log;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod seed;
pub mod stats;
