//! Per-request context carrying user-facing messages.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// A message shown to the user alongside the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// State scoped to one incoming request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub path: String,
    messages: Vec<UserMessage>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(UserMessage {
            level,
            text: text.into(),
        });
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.add_message(MessageLevel::Warning, text);
    }

    /// Drain queued messages for rendering.
    pub fn take_messages(&mut self) -> Vec<UserMessage> {
        std::mem::take(&mut self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_messages_drains() {
        let mut request = RequestContext::new("/layout-showcase/map-layout");
        request.warning("first");
        request.add_message(MessageLevel::Info, "second");
        let taken = request.take_messages();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].level, MessageLevel::Warning);
        assert_eq!(taken[1].level, MessageLevel::Info);
        assert!(request.take_messages().is_empty());
    }
}
