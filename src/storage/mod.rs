// storage/mod.rs
// Query history persistence

pub mod models;
pub mod pool;
pub mod queries;
pub mod schema;

// Re-export commonly used items
pub use models::{Address, QueryRecord};
pub use pool::init_db_pool;
pub use queries::{PgQueryStore, QueryStore};
pub use schema::{ensure_schema, spawn_schema_bootstrap};
