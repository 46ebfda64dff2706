pub mod cache;
pub mod cors;

pub use cache::cache_control_middleware;
pub use cors::cors_layer;
