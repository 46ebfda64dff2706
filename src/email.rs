mod service;

pub use service::EmailService;
