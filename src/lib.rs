pub mod config;
pub mod defaults;
pub mod error_utils;
pub mod executor;
pub mod installer;
pub mod models;
pub mod platform;
pub mod requirements;
