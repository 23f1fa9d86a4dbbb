use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_net::http::Request;
use log::info;

use crate::config;
use crate::contact::form::{ContactError, ContactMessage};

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), ContactError>>>>;

/// Where a finished contact message goes.
pub trait ContactSubmitter {
    fn submit(&self, message: ContactMessage) -> SubmitFuture;
}

/// Keeps the message in the browser console. Always succeeds.
pub struct LogSubmitter;

impl ContactSubmitter for LogSubmitter {
    fn submit(&self, message: ContactMessage) -> SubmitFuture {
        Box::pin(async move {
            info!("Contact form submitted: {:?}", message);
            Ok(())
        })
    }
}

/// Posts the message as JSON to a relay endpoint.
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ContactSubmitter for HttpSubmitter {
    fn submit(&self, message: ContactMessage) -> SubmitFuture {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let response = Request::post(&endpoint)
                .json(&message)
                .map_err(|e| ContactError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContactError::Request(e.to_string()))?;

            if !response.ok() {
                return Err(ContactError::Rejected(response.status()));
            }
            info!("Contact message delivered to {}", endpoint);
            Ok(())
        })
    }
}

/// Picks the submitter for the configured endpoint, falling back to the console.
pub fn submitter_for(endpoint: Option<&str>) -> Rc<dyn ContactSubmitter> {
    match endpoint {
        Some(url) => Rc::new(HttpSubmitter::new(url)),
        None => Rc::new(LogSubmitter),
    }
}

pub fn default_submitter() -> Rc<dyn ContactSubmitter> {
    submitter_for(config::contact_endpoint())
}

/// Progress of the latest submission, as shown under the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }

    /// Status once the user edits a field. A failure message is stale by then.
    pub fn after_edit(&self) -> SubmitStatus {
        match self {
            SubmitStatus::Failed(_) => SubmitStatus::Idle,
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        }
    }

    #[test]
    fn log_submitter_resolves_immediately() {
        assert_eq!(block_on(LogSubmitter.submit(message())), Ok(()));
    }

    #[test]
    fn status_defaults_to_idle() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
        assert!(SubmitStatus::Sending.is_sending());
        assert!(!SubmitStatus::Failed("boom".to_string()).is_sending());
    }

    #[test]
    fn editing_clears_a_failure_only() {
        let failed = SubmitStatus::Failed("Name is required".to_string());
        assert_eq!(failed.after_edit(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Sending.after_edit(), SubmitStatus::Sending);
        assert_eq!(SubmitStatus::Sent.after_edit(), SubmitStatus::Sent);
        assert_eq!(SubmitStatus::Idle.after_edit(), SubmitStatus::Idle);
    }
}
