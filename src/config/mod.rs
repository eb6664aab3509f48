/// Database configuration and connection management
pub mod database;

/// Menu seeding from menu.toml
pub mod menu;
