//! Mock verification provider for tests.
//!
//! Answers both operations with a scripted status (or a scripted
//! failure) and records what it was called with, so route tests can
//! assert that the provider was or was not invoked and what phone
//! number reached it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::VerificationProvider;
use crate::error::ProviderError;

#[derive(Clone)]
pub struct MockVerificationProvider {
    status: String,
    fail_with: Option<String>,
    calls: Arc<AtomicU64>,
    last_to: Arc<Mutex<Option<String>>>,
    last_code: Arc<Mutex<Option<String>>>,
}

impl MockVerificationProvider {
    /// A provider that reports `"pending"` from both operations.
    pub fn new() -> Self {
        Self::with_status("pending")
    }

    /// A provider that reports `status` from both operations.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            fail_with: None,
            calls: Arc::new(AtomicU64::new(0)),
            last_to: Arc::new(Mutex::new(None)),
            last_code: Arc::new(Mutex::new(None)),
        }
    }

    /// A provider whose operations always fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            status: String::new(),
            fail_with: Some(message.into()),
            calls: Arc::new(AtomicU64::new(0)),
            last_to: Arc::new(Mutex::new(None)),
            last_code: Arc::new(Mutex::new(None)),
        }
    }

    /// How many times either operation has been invoked.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// The phone number passed to the most recent operation.
    pub fn last_recipient(&self) -> Option<String> {
        self.last_to.lock().unwrap().clone()
    }

    /// The code passed to the most recent check.
    pub fn last_code(&self) -> Option<String> {
        self.last_code.lock().unwrap().clone()
    }

    fn answer(&self, to: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_to.lock().unwrap() = Some(to.to_string());

        match &self.fail_with {
            Some(message) => Err(ProviderError::Api(message.clone())),
            None => Ok(self.status.clone()),
        }
    }
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationProvider for MockVerificationProvider {
    async fn start_verification(&self, to: &str) -> Result<String, ProviderError> {
        self.answer(to)
    }

    async fn check_verification(&self, to: &str, code: &str) -> Result<String, ProviderError> {
        *self.last_code.lock().unwrap() = Some(code.to_string());
        self.answer(to)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
