pub mod action;
pub mod args;
pub mod build;
pub mod config;
pub mod download;
pub mod extract;
pub mod link;
pub mod platform;
pub mod progress;
pub mod schema;
