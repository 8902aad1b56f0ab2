//! API Response types
//!
//! Mutating endpoints answer with a message-only body:
//! ```json
//! { "message": "New member added successfully" }
//! ```

use serde::{Deserialize, Serialize};

/// Message-only response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
