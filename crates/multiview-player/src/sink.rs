//! Delivery of encoded messages to embeds.

use std::sync::{Arc, Mutex};

use multiview_common::PlayerError;

use crate::command::PostMessage;

/// Scripts waiting to be evaluated in the hosting page.
pub type ScriptQueue = Arc<Mutex<Vec<String>>>;

/// Receives `(message, target_origin)` pairs bound for one embed.
pub trait MessageSink {
    fn deliver(&mut self, message: &PostMessage) -> Result<(), PlayerError>;
}

/// Renders each message as a script that posts into the iframe with
/// `frame_id`, and queues it for the host page to evaluate.
#[derive(Debug, Clone)]
pub struct ScriptSink {
    frame_id: String,
    queue: ScriptQueue,
}

impl ScriptSink {
    pub fn new(frame_id: impl Into<String>, queue: ScriptQueue) -> Self {
        Self {
            frame_id: frame_id.into(),
            queue,
        }
    }

    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }
}

impl MessageSink for ScriptSink {
    fn deliver(&mut self, message: &PostMessage) -> Result<(), PlayerError> {
        let script = js_post_message(&self.frame_id, message);
        let mut queue = self
            .queue
            .lock()
            .map_err(|e| PlayerError::Sink(format!("script queue poisoned: {e}")))?;
        queue.push(script);
        Ok(())
    }
}

/// JavaScript that posts `message` into the iframe with id `frame_id`.
/// A missing frame is a no-op on the page.
pub fn js_post_message(frame_id: &str, message: &PostMessage) -> String {
    let quote = |s: &str| serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "(function(){{var f=document.getElementById({});if(f&&f.contentWindow){{f.contentWindow.postMessage({},{});}}}})();",
        quote(frame_id),
        quote(&message.message),
        quote(&message.target_origin),
    )
}

/// Take every queued script.
pub fn drain_scripts(queue: &ScriptQueue) -> Vec<String> {
    match queue.lock() {
        Ok(mut scripts) => std::mem::take(&mut *scripts),
        Err(_) => Vec::new(),
    }
}

/// Keeps every delivered message. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    delivered: Arc<Mutex<Vec<PostMessage>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<PostMessage> {
        self.delivered
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl MessageSink for RecordingSink {
    fn deliver(&mut self, message: &PostMessage) -> Result<(), PlayerError> {
        self.delivered
            .lock()
            .map_err(|e| PlayerError::Sink(e.to_string()))?
            .push(message.clone());
        Ok(())
    }
}
