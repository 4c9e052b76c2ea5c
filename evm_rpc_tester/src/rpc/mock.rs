//!
//! The scripted in-memory transport.
//!

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::FutureExt;

///
/// The scripted response.
///
#[derive(Debug)]
enum Response {
    /// A successful result.
    Value(jsonrpc_core::Value),
    /// A failed call.
    Error(web3::Error),
    /// A call that never completes.
    Hang,
}

///
/// The scripted in-memory transport.
///
/// Answers calls with the queued responses in order and records every request.
///
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    /// The recorded requests.
    requests: Arc<Mutex<Vec<(String, Vec<jsonrpc_core::Value>)>>>,
    /// The queued responses.
    responses: Arc<Mutex<VecDeque<Response>>>,
}

impl MockTransport {
    ///
    /// Queues a successful result.
    ///
    pub fn push_value(&self, value: jsonrpc_core::Value) {
        self.push(Response::Value(value));
    }

    ///
    /// Queues a JSON-RPC error response.
    ///
    pub fn push_rpc_error(&self, code: i64, message: &str) {
        self.push(Response::Error(web3::Error::Rpc(jsonrpc_core::Error {
            code: jsonrpc_core::ErrorCode::ServerError(code),
            message: message.to_owned(),
            data: None,
        })));
    }

    ///
    /// Queues an arbitrary failure.
    ///
    pub fn push_error(&self, error: web3::Error) {
        self.push(Response::Error(error));
    }

    ///
    /// Queues a call that never completes.
    ///
    pub fn push_hang(&self) {
        self.push(Response::Hang);
    }

    ///
    /// Returns the recorded requests as method names with parameters.
    ///
    pub fn requests(&self) -> Vec<(String, Vec<jsonrpc_core::Value>)> {
        self.requests.lock().expect("Sync").clone()
    }

    fn push(&self, response: Response) {
        self.responses.lock().expect("Sync").push_back(response);
    }
}

impl web3::Transport for MockTransport {
    type Out = BoxFuture<'static, web3::error::Result<jsonrpc_core::Value>>;

    fn prepare(
        &self,
        method: &str,
        params: Vec<jsonrpc_core::Value>,
    ) -> (web3::RequestId, jsonrpc_core::Call) {
        let mut requests = self.requests.lock().expect("Sync");
        requests.push((method.to_owned(), params.clone()));
        let id = requests.len();
        (id, web3::helpers::build_request(id, method, params))
    }

    fn send(&self, _id: web3::RequestId, _request: jsonrpc_core::Call) -> Self::Out {
        match self.responses.lock().expect("Sync").pop_front() {
            Some(Response::Value(value)) => futures::future::ready(Ok(value)).boxed(),
            Some(Response::Error(error)) => futures::future::ready(Err(error)).boxed(),
            Some(Response::Hang) => futures::future::pending().boxed(),
            None => futures::future::ready(Err(web3::Error::Unreachable)).boxed(),
        }
    }
}
