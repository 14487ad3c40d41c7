//! Call gate contract and in-process implementation.

use crate::ipc::channel::{ChannelHandler, ChannelRequest, ChannelResponse};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type IpcResult<T> = Result<T, IpcError>;

/// Channel registration and invocation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcError {
    InvalidLabel(String),
    DuplicateChannel(String),
    ChannelNotRegistered(String),
    RequestMismatch(String),
    Transport(String),
}

impl Display for IpcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLabel(value) => write!(f, "channel label is invalid: {value}"),
            Self::DuplicateChannel(value) => write!(f, "channel already registered: {value}"),
            Self::ChannelNotRegistered(value) => write!(f, "channel not registered: {value}"),
            Self::RequestMismatch(value) => {
                write!(f, "request shape does not match channel: {value}")
            }
            Self::Transport(message) => write!(f, "call gate transport failed: {message}"),
        }
    }
}

impl Error for IpcError {}

/// Transport host that owns named channel registrations.
pub trait CallGate {
    /// Binds `handler` to `label`.
    fn register_func(&mut self, label: &str, handler: ChannelHandler) -> IpcResult<()>;
    /// Removes the handler bound to `label`.
    fn unregister_func(&mut self, label: &str) -> IpcResult<()>;
}

/// Call gate that dispatches within the current process.
#[derive(Default)]
pub struct InProcessCallGate {
    handlers: BTreeMap<String, ChannelHandler>,
}

impl InProcessCallGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns sorted registered labels.
    pub fn labels(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Calls the handler registered under `label`.
    pub fn invoke(&self, label: &str, request: ChannelRequest) -> IpcResult<ChannelResponse> {
        let handler = self
            .handlers
            .get(label.trim())
            .ok_or_else(|| IpcError::ChannelNotRegistered(label.trim().to_string()))?;
        handler(request)
    }
}

impl CallGate for InProcessCallGate {
    fn register_func(&mut self, label: &str, handler: ChannelHandler) -> IpcResult<()> {
        let label = label.trim().to_string();
        if !is_valid_label(&label) {
            return Err(IpcError::InvalidLabel(label));
        }
        if self.handlers.contains_key(label.as_str()) {
            return Err(IpcError::DuplicateChannel(label));
        }

        self.handlers.insert(label, handler);
        Ok(())
    }

    fn unregister_func(&mut self, label: &str) -> IpcResult<()> {
        let label = label.trim();
        match self.handlers.remove(label) {
            Some(_) => Ok(()),
            None => Err(IpcError::ChannelNotRegistered(label.to_string())),
        }
    }
}

fn is_valid_label(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::{CallGate, InProcessCallGate, IpcError};
    use crate::ipc::channel::{ChannelHandler, ChannelRequest, ChannelResponse};
    use std::sync::Arc;

    fn version_handler() -> ChannelHandler {
        Arc::new(|_request: ChannelRequest| Ok(ChannelResponse::ApiVersion(7)))
    }

    #[test]
    fn registers_and_invokes_channel() {
        let mut gate = InProcessCallGate::new();
        gate.register_func("Test.Version", version_handler())
            .expect("channel should register");

        let response = gate
            .invoke("Test.Version", ChannelRequest::ApiVersion)
            .expect("registered channel should answer");
        assert_eq!(response, ChannelResponse::ApiVersion(7));
        assert_eq!(gate.labels(), vec!["Test.Version".to_string()]);
    }

    #[test]
    fn rejects_invalid_or_duplicate_label() {
        let mut gate = InProcessCallGate::new();
        let blank = gate.register_func("   ", version_handler());
        assert!(matches!(blank, Err(IpcError::InvalidLabel(_))));
        let spaced = gate.register_func("Test Version", version_handler());
        assert!(matches!(spaced, Err(IpcError::InvalidLabel(_))));

        gate.register_func("Test.Version", version_handler())
            .expect("first registration should succeed");
        let duplicate = gate.register_func("Test.Version", version_handler());
        assert!(matches!(duplicate, Err(IpcError::DuplicateChannel(_))));
    }

    #[test]
    fn unregister_removes_channel_and_reports_missing() {
        let mut gate = InProcessCallGate::new();
        gate.register_func("Test.Version", version_handler())
            .expect("channel should register");

        gate.unregister_func("Test.Version")
            .expect("registered channel should unregister");
        assert!(gate.is_empty());

        let err = gate
            .invoke("Test.Version", ChannelRequest::ApiVersion)
            .expect_err("unregistered channel must not answer");
        assert_eq!(err, IpcError::ChannelNotRegistered("Test.Version".to_string()));

        let missing = gate.unregister_func("Test.Version");
        assert!(matches!(missing, Err(IpcError::ChannelNotRegistered(_))));
    }
}
