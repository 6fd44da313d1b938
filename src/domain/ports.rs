use crate::utils::error::Result;
use async_trait::async_trait;

/// The single HTTP capability a view needs. `get` resolves to the body
/// bytes of a successful response; any transport or status failure is an
/// `Err`. Passed to components explicitly at construction.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
}
