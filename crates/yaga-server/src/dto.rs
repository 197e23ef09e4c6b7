//! JSON bodies exchanged with the front end.

use serde::{Deserialize, Serialize};

use yaga_application::NextPrompt;
use yaga_core::session::COMPLETION_MESSAGE;

/// Body of `POST /exercise/chord-practice/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    pub session_id: String,
}

/// Body of `GET /exercise/chord-practice/{session_id}/next`.
///
/// Serialized as either `{"prompt": "..."}` or
/// `{"message": "Exercise complete"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NextResponse {
    Prompt { prompt: String },
    Complete { message: String },
}

impl From<NextPrompt> for NextResponse {
    fn from(next: NextPrompt) -> Self {
        match next {
            NextPrompt::Prompt(prompt) => NextResponse::Prompt { prompt },
            NextPrompt::Complete => NextResponse::Complete {
                message: COMPLETION_MESSAGE.to_string(),
            },
        }
    }
}

/// Error body, e.g. `{"detail": "Not Found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
