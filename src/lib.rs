pub mod config;
pub mod controller;
pub mod error;
pub mod pipeline;
pub mod services;
pub mod state;
pub mod types;
