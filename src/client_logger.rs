//! Logging trait for Gemini client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to
//! capture and log the API traffic passing through the
//! [`Gemini`](crate::Gemini) client.

use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// A trait for logging Gemini client operations.
///
/// Implement this trait to record every request the client sends and every
/// successful response it receives.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Mutex;
/// use tensio::{ClientLogger, GenerateContentRequest, GenerateContentResponse};
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, request: &GenerateContentRequest) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request: {}", serde_json::to_string(request).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, response: &GenerateContentResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log a request about to be sent.
    ///
    /// Called once per `send` call, before the network round trip.
    fn log_request(&self, request: &GenerateContentRequest);

    /// Log a complete response from a successful `send` call.
    ///
    /// Called once per successful `send` call with the parsed
    /// [`GenerateContentResponse`].
    fn log_response(&self, response: &GenerateContentResponse);
}
