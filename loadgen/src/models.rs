use serde::{Deserialize, Serialize};

pub const USER_ID: &str = "test-user@test.com";
pub const CHANNEL_TYPE: &str = "whatsapp";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRequest {
    pub question: String,
    pub metadata: RequestMetadata,
    pub configuration: RequestConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetadata {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "channelType")]
    pub channel_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfiguration {
    pub config_params: ConfigParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigParams {
    // Opaque passthrough field; the receiving service defines its meaning.
    #[serde(rename = "maxMinutes")]
    pub max_minutes: String,
    pub temperature: f64,
    pub k_top_retrieval: u32,
    pub k_top_history: u32,
}

impl ConversationRequest {
    /// Builds the payload for one request. Only the question and the session
    /// identifier vary; every other field is a fixed constant.
    pub fn new(question: String, session_id: String) -> Self {
        Self {
            question,
            metadata: RequestMetadata {
                user_id: USER_ID.to_string(),
                session_id,
                channel_type: CHANNEL_TYPE.to_string(),
            },
            configuration: RequestConfiguration {
                config_params: ConfigParams {
                    max_minutes: String::new(),
                    temperature: 0.3,
                    k_top_retrieval: 4,
                    k_top_history: 5,
                },
            },
        }
    }
}
