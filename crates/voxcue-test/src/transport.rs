use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use voxcue_auth::{HttpTransport, TransportError, TransportResponse};

type ScriptedReply = Result<TransportResponse, String>;

/// A mock implementation of the [`HttpTransport`] trait that replays queued replies in order.
///
/// Every call yields to the executor once before answering, so a concurrently polled future
/// observes the caller suspended mid-request. Clones share the queue and the request log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<ScriptedReply>>>,
    requests: Rc<RefCell<Vec<(String, String)>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, reason: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(reason.to_owned()));
        self
    }

    /// `(url, body)` of every request made so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        self.requests.borrow_mut().push((url.to_owned(), body));

        tokio::task::yield_now().await;

        match self.replies.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(TransportError::Custom(reason)),
            None => Err(TransportError::Custom(
                "no scripted reply left".to_owned(),
            )),
        }
    }
}
