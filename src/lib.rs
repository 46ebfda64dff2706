pub mod assets;
pub mod cli;
pub mod config;
pub mod email;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;
pub mod web;

pub use config::Config;
pub use routes::AppState;
pub use web::WebState;
