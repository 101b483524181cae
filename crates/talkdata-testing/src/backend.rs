use std::collections::VecDeque;
use std::sync::Mutex;
use talkdata_sdk::{Error, QueryBackend, Result};
use talkdata_types::{QueryRequest, QueryResponse};

/// Backend answering from a queue of canned outcomes, recording every request.
#[derive(Default)]
pub struct FakeBackend {
    outcomes: Mutex<VecDeque<Result<QueryResponse>>>,
    requests: Mutex<Vec<QueryRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(self, response: QueryResponse) -> Self {
        self.push(Ok(response));
        self
    }

    pub fn failing(self, status: u16, message: Option<&str>) -> Self {
        self.push(Err(Error::Http {
            status,
            message: message.map(str::to_string),
        }));
        self
    }

    pub fn requests(&self) -> Vec<QueryRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, outcome: Result<QueryResponse>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

impl QueryBackend for FakeBackend {
    fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(Error::Http {
                status: 503,
                message: None,
            }))
    }
}
