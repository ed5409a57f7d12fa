pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod github;
pub mod pagination;
pub mod render;
pub mod server;
pub mod terminal;
pub mod types;
pub mod view;
