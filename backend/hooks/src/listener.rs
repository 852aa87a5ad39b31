/// Event hook contract.
///
/// Plugs register listeners for named events; the hook dispatches an event to
/// every listener for that name and collects their results.
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A single registered event listener.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Handle the event. The returned value is collected by the dispatcher.
    async fn call(&self, args: &[Value]) -> Result<Value>;
}

/// The capability a host exposes for event dispatch.
#[async_trait]
pub trait EventHook: Send + Sync {
    /// Dispatch a named event to all registered listeners and return their
    /// results in registration order.
    async fn dispatch_event(&self, event_name: &str, args: &[Value]) -> Result<Vec<Value>>;

    /// Event names currently known to the hook.
    async fn list_events(&self) -> Vec<String>;
}
