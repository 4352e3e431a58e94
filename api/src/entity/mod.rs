//! Entity module for database models

pub mod applications;
