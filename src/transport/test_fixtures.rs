//! Scripted HTTP client shared by tests across the crate.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Replays a fixed sequence of responses and records every request.
///
/// Running out of scripted responses yields a connection error so a test
/// that makes an unexpected call fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and JSON body.
    pub fn json(self, status: u16, body: &serde_json::Value) -> Self {
        self.raw(status, body.to_string().into_bytes())
    }

    /// Queues a response with the given status and raw body.
    pub fn raw(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        let status = http::StatusCode::from_u16(status).unwrap();
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body.into())));
        self
    }

    /// Queues a transport error.
    pub fn error(self, error: HttpError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for ScriptedClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(HttpError::Connection(Box::new(std::io::Error::other(
                "no scripted response left",
            ))))
        })
    }
}
