pub mod adapters;
pub mod backend;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpBackend;
pub use config::CliConfig;
pub use core::{app::App, view::GreetingView};
pub use utils::error::{FrontError, Result};
