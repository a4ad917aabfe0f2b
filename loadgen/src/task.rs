use anyhow::Result;
use reqwest::{Client, StatusCode};

use crate::config::TargetConfig;
use crate::corpus::QuestionCorpus;
use crate::models::ConversationRequest;
use crate::sampler::Sampler;

pub const CONVERSATION_PATH: &str = "/datapath/conversation";

/// Outcome of one task invocation. A non-200 response is a recorded failure,
/// not an error: load generation continues uninterrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Failed { status: u16, body: String },
}

impl TaskOutcome {
    pub fn status(&self) -> u16 {
        match self {
            TaskOutcome::Success => 200,
            TaskOutcome::Failed { status, .. } => *status,
        }
    }
}

/// Issues one randomized conversation request per invocation. Stateless
/// between invocations; only the sampled question and session id vary.
#[derive(Debug, Clone)]
pub struct ConversationTask {
    client: Client,
    target: TargetConfig,
    corpus: QuestionCorpus,
}

impl ConversationTask {
    pub fn new(target: TargetConfig, corpus: QuestionCorpus) -> Result<Self> {
        let client = Client::builder()
            .timeout(target.request_timeout)
            .build()?;
        Ok(Self {
            client,
            target,
            corpus,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.target.base_url, CONVERSATION_PATH)
    }

    /// Sends one conversation request. Transport errors propagate to the
    /// caller; any HTTP response, success or not, completes the invocation.
    pub async fn run_once(&self, sampler: &mut impl Sampler) -> Result<TaskOutcome> {
        let question = sampler.next_question(&self.corpus).to_string();
        let session_id = sampler.next_session_id();
        let payload = ConversationRequest::new(question, session_id);

        let response = self
            .client
            .post(self.endpoint())
            .header("token", &self.target.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(TaskOutcome::Success);
        }

        let body = response.text().await?;
        log::error!("Error {}: {}", status.as_u16(), body);
        Ok(TaskOutcome::Failed {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::RandomSampler;
    use serde_json::json;
    use std::collections::HashSet;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_task(base_url: String) -> ConversationTask {
        let target = TargetConfig {
            base_url,
            ..TargetConfig::default()
        };
        ConversationTask::new(target, QuestionCorpus::default_questions()).unwrap()
    }

    /// Deterministic stand-in so assertions can pin the exact payload.
    struct FixedSampler {
        session_id: String,
    }

    impl Sampler for FixedSampler {
        fn next_question<'a>(&mut self, corpus: &'a QuestionCorpus) -> &'a str {
            &corpus.questions()[0]
        }

        fn next_session_id(&mut self) -> String {
            self.session_id.clone()
        }
    }

    #[tokio::test]
    async fn posts_conversation_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/datapath/conversation"))
            .and(header("content-type", "application/json"))
            .and(header("token", "chatdfsdfsecret"))
            .and(body_partial_json(json!({
                "question": "¿Qué cursos de informática avanzada ofrece Datapath?",
                "metadata": {
                    "userId": "test-user@test.com",
                    "sessionId": "11111111-2222-3333-4444-555555555555",
                    "channelType": "whatsapp"
                },
                "configuration": {
                    "config_params": {
                        "maxMinutes": "",
                        "temperature": 0.3,
                        "k_top_retrieval": 4,
                        "k_top_history": 5
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let task = test_task(mock_server.uri());
        let mut sampler = FixedSampler {
            session_id: "11111111-2222-3333-4444-555555555555".to_string(),
        };

        let outcome = task.run_once(&mut sampler).await.unwrap();
        assert_eq!(outcome, TaskOutcome::Success);
    }

    #[tokio::test]
    async fn non_200_is_recorded_not_fatal() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/datapath/conversation"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&mock_server)
            .await;

        let task = test_task(mock_server.uri());
        let mut sampler = RandomSampler::seeded(1);

        let outcome = task.run_once(&mut sampler).await.unwrap();
        assert_eq!(
            outcome,
            TaskOutcome::Failed {
                status: 500,
                body: "internal error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn each_request_gets_a_fresh_session_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/datapath/conversation"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let task = test_task(mock_server.uri());
        let mut sampler = RandomSampler::seeded(9);
        for _ in 0..5 {
            task.run_once(&mut sampler).await.unwrap();
        }

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 5);

        let corpus = QuestionCorpus::default_questions();
        let mut session_ids = HashSet::new();
        for request in &requests {
            let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
            let question = body["question"].as_str().unwrap();
            assert!(corpus.questions().iter().any(|q| q == question));
            let session_id = body["metadata"]["sessionId"].as_str().unwrap();
            session_ids.insert(session_id.to_string());
        }
        assert_eq!(session_ids.len(), 5);
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        // Nothing listens on this port; the connection is refused.
        let task = test_task("http://127.0.0.1:9".to_string());
        let mut sampler = RandomSampler::seeded(3);

        assert!(task.run_once(&mut sampler).await.is_err());
    }
}
