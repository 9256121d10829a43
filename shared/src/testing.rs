use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Scripted transport that records every request it sees.
///
/// Responses are queued per (method, path); the last queued response for a
/// route repeats. Unscripted routes answer 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<HashMap<(Method, String), VecDeque<HttpResponse>>>,
    calls: RefCell<Vec<HttpRequest>>,
    offline: bool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails before reaching a server
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn respond(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        let body = match body {
            Value::Null => String::new(),
            other => other.to_string(),
        };
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(HttpResponse { status, body });
        self
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .cloned()
            .collect()
    }

    pub fn count(&self, method: Method) -> usize {
        self.calls.borrow().iter().filter(|call| call.method == method).count()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.calls.borrow_mut().push(request.clone());
        if self.offline {
            return Err(ApiError::Network("connection refused".to_string()));
        }

        let mut routes = self.routes.borrow_mut();
        let response = match routes.get_mut(&(request.method, request.path)) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(response.unwrap_or(HttpResponse {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        }))
    }
}
