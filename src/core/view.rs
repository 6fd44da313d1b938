use crate::domain::model::Greeting;
use crate::domain::ports::BackendClient;
use crate::utils::error::Result;
use tokio::sync::oneshot;

/// Fixed backend path; only the base URL is configurable.
pub const HELLO_PATH: &str = "/api/hello";

pub const LOADING_PLACEHOLDER: &str = "(loading...)";
pub const BACKEND_ERROR_TEXT: &str = "Error calling backend";

/// The root (and only) view: one displayable text value, settled exactly
/// once by the single request issued at mount time.
pub struct GreetingView {
    message: String,
    pending: Option<oneshot::Receiver<Result<Greeting>>>,
}

impl GreetingView {
    /// Issues the greeting request and returns immediately; `message`
    /// stays at the placeholder until `settle` processes the response.
    pub fn mount<B: BackendClient + 'static>(client: B) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // The view may already be gone; an undeliverable response is dropped.
            let _ = tx.send(fetch_greeting(&client).await);
        });

        Self {
            message: LOADING_PLACEHOLDER.to_string(),
            pending: Some(rx),
        }
    }

    /// Consumes the single response event: success installs the server's
    /// text, any failure the fixed error literal. No-op once settled.
    pub async fn settle(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };

        self.message = match rx.await {
            Ok(Ok(greeting)) => greeting.message,
            _ => BACKEND_ERROR_TEXT.to_string(),
        };
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_none()
    }

    /// Reads the current displayable text.
    pub fn render(&self) -> &str {
        &self.message
    }
}

async fn fetch_greeting<B: BackendClient>(client: &B) -> Result<Greeting> {
    let body = client.get(HELLO_PATH).await?;
    let greeting: Greeting = serde_json::from_slice(&body)?;
    Ok(greeting)
}
