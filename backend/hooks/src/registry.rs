/// Event listener registry.
///
/// Listeners are organized by event name and run sequentially in registration
/// order. A listener error is isolated: it is logged, contributes no result,
/// and the rest of the chain still runs.
use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::listener::{EventHook, EventListener};

type ListenerBox = Arc<dyn EventListener>;
type EventMap = HashMap<String, Vec<ListenerBox>>;

/// Thread-safe registry of event listeners keyed by event name.
#[derive(Default, Clone)]
pub struct EventRegistry {
    listeners: Arc<RwLock<EventMap>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for a named event.
    pub async fn register(&self, event_name: impl Into<String>, listener: Arc<dyn EventListener>) {
        let mut map = self.listeners.write().await;
        map.entry(event_name.into()).or_default().push(listener);
    }

    /// Remove all listeners for an event. Returns true if any were removed.
    pub async fn unregister(&self, event_name: &str) -> bool {
        let mut map = self.listeners.write().await;
        map.remove(event_name).is_some()
    }
}

#[async_trait]
impl EventHook for EventRegistry {
    async fn dispatch_event(&self, event_name: &str, args: &[Value]) -> Result<Vec<Value>> {
        let map = self.listeners.read().await;
        let Some(chain) = map.get(event_name) else {
            return Ok(Vec::new());
        };

        let mut results = Vec::with_capacity(chain.len());
        for listener in chain.iter() {
            debug!("[Events] Dispatching {} to {}", event_name, listener.name());
            match listener.call(args).await {
                Ok(value) => results.push(value),
                Err(e) => {
                    // Listener errors are non-fatal; the chain continues.
                    warn!("[Events] {} failed on {}: {}", listener.name(), event_name, e);
                }
            }
        }
        Ok(results)
    }

    async fn list_events(&self) -> Vec<String> {
        let map = self.listeners.read().await;
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        names
    }
}
