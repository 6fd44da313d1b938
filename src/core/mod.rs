pub mod app;
pub mod view;

pub use crate::domain::model::Greeting;
pub use crate::domain::ports::{BackendClient, ConfigProvider};
pub use crate::utils::error::Result;
