//! Pluggable submission backends for the waitlist form.
//!
//! The controller only relies on the [`SubmitWaitlist`] contract: a record
//! goes in, a future resolves or rejects. The real endpoint is supplied by
//! the integrator at build time; without one the simulated backend stands
//! in, the way the original page shipped.

use std::future::Future;

use thiserror::Error;

use super::waitlist::SubmissionRecord;

/// The external submission endpoint, baked in at build time.
pub const WAITLIST_ENDPOINT: Option<&str> = option_env!("SURVADE_WAITLIST_ENDPOINT");

/// The submission backend rejected (network failure, backend rejection).
/// Recoverable: the form reverts to editable with a generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubmissionError(pub String);

/// Abstract submission capability the form controller depends on.
pub trait SubmitWaitlist {
    fn submit(
        &self,
        record: &SubmissionRecord,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// JSON POST to a form backend (Formspree, a custom API, ...).
#[cfg(not(feature = "ssr"))]
pub struct HttpSubmission {
    endpoint: String,
}

#[cfg(not(feature = "ssr"))]
impl HttpSubmission {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl SubmitWaitlist for HttpSubmission {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), SubmissionError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .json(record)
            .map_err(|err| SubmissionError(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmissionError(err.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmissionError(format!(
                "endpoint returned {}",
                response.status()
            )))
        }
    }
}

/// Stand-in backend: resolves after a short delay, logging the record.
#[cfg(not(feature = "ssr"))]
pub struct SimulatedSubmission;

#[cfg(not(feature = "ssr"))]
impl SubmitWaitlist for SimulatedSubmission {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), SubmissionError> {
        use gloo_timers::future::TimeoutFuture;

        TimeoutFuture::new(1_500).await;
        leptos::logging::log!(
            "waitlist signup (simulated): {} <{}> [{}]",
            record.name,
            record.email,
            record.specialty
        );
        Ok(())
    }
}

/// Submit through the configured backend: the build-time endpoint when one
/// is set, the simulated stand-in otherwise.
pub async fn submit_entry(record: &SubmissionRecord) -> Result<(), SubmissionError> {
    #[cfg(not(feature = "ssr"))]
    {
        match WAITLIST_ENDPOINT {
            Some(endpoint) => HttpSubmission::new(endpoint).submit(record).await,
            None => SimulatedSubmission.submit(record).await,
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = record;
        Ok(())
    }
}
