//! HTTP handlers.

mod health;
mod history;
mod lookup;
mod metrics;
mod root;
mod validate;

pub use health::health_handler;
pub use history::history_handler;
pub use lookup::lookup_handler;
pub use metrics::metrics_handler;
pub use root::root_handler;
pub use validate::validate_handler;
