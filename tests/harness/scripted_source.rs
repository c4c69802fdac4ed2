use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homework_bot::error::PollError;
use homework_bot::port::ReviewSource;
use serde_json::{json, Value};

/// One scripted reply of the review API.
pub enum Step {
    Respond(Value),
    Fail(PollError),
    Panic,
}

/// Review source replaying scripted steps; replies with no homeworks once
/// the script runs out.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Step>>>,
    requests: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into_iter().collect())),
            requests: Arc::default(),
        }
    }

    /// `from_date` of every request made so far.
    pub fn requests(&self) -> Vec<i64> {
        self.requests.lock().expect("lock source requests").clone()
    }
}

#[async_trait]
impl ReviewSource for ScriptedSource {
    async fn fetch_updates(&self, from_date: i64) -> Result<Value, PollError> {
        self.requests
            .lock()
            .expect("lock source requests")
            .push(from_date);
        let step = self.steps.lock().expect("lock source steps").pop_front();
        match step {
            Some(Step::Respond(value)) => Ok(value),
            Some(Step::Fail(err)) => Err(err),
            Some(Step::Panic) => panic!("scripted review source panic"),
            None => Ok(json!({"homeworks": []})),
        }
    }
}
