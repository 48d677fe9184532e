//! Request / response types for the analysis endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON request body for a plain chat turn.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageRequest {
    /// The text forwarded to the model verbatim.
    pub message: String,
}

/// Response for the video branch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// The model's analysis of the uploaded video.
    pub analysis: String,
}

/// Response for the message branch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplyResponse {
    /// The model's reply to the chat message.
    pub reply: String,
}
