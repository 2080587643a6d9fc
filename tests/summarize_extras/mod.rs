use std::sync::Mutex;

use async_trait::async_trait;
use websum::backend::ChatBackend;
use websum::error::{Error, Result};
use websum::prompt::Message;

/// Backend stub that records every message sequence it receives and answers
/// with a canned summary.
pub(crate) struct StubBackend {
    response: String,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl StubBackend {
    pub(crate) fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().expect("stub mutex poisoned").len()
    }

    pub(crate) fn recorded_messages(&self) -> Vec<Vec<Message>> {
        self.calls.lock().expect("stub mutex poisoned").clone()
    }
}

#[async_trait]
impl ChatBackend for StubBackend {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        self.calls
            .lock()
            .expect("stub mutex poisoned")
            .push(messages.to_vec());

        Ok(self.response.clone())
    }
}

/// Backend stub that always fails the way a broken upstream would.
pub(crate) struct FailingBackend;

#[async_trait]
impl ChatBackend for FailingBackend {
    async fn complete(&self, _messages: &[Message]) -> Result<String> {
        Err(Error::Backend {
            status: 500,
            body: "upstream exploded".to_string(),
        })
    }
}
