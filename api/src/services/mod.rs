// Business logic service implementations

pub mod analytics;
pub mod analytics_service;
pub mod application_service;
pub mod health;
