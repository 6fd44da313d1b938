use serde::{Deserialize, Serialize};

/// The one entity on the wire: `{"message": "<text>"}`.
/// Decoded by the front-end, encoded by the demo backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}
