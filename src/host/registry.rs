//! Named entry-point registry for host embeddings.

use std::collections::HashMap;

use bytes::Bytes;

/// A host-callable entry point.
///
/// Takes the call's argument buffers and returns the call's value: a string
/// on success, or `None` when the call failed and a diagnostic was emitted
/// instead.
pub type Callback = Box<dyn Fn(&[Bytes]) -> Option<String> + Send + Sync>;

/// A registry of named entry points exposed to a host environment.
///
/// Hosts that bind functions into a global namespace (a WASM runtime, a
/// server-side embedding, a CLI shim) register each entry point once at
/// startup and dispatch by name afterwards. The registry carries no
/// algorithmic logic; callbacks close over whatever engine they need.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use fingerrs::host::Registry;
///
/// let mut registry = Registry::new();
/// registry.register("echoLen", |args: &[Bytes]| {
///     args.first().map(|b| b.len().to_string())
/// });
///
/// let reply = registry.dispatch("echoLen", &[Bytes::from_static(b"abc")]);
/// assert_eq!(reply.as_deref(), Some("3"));
/// ```
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, Callback>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers an entry point under a host-visible name.
    ///
    /// Registering the same name twice replaces the earlier callback.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&[Bytes]) -> Option<String> + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Box::new(callback));
    }

    /// Dispatches a call to a registered entry point.
    ///
    /// Returns the callback's value, or `None` (with a diagnostic) if no
    /// entry point is registered under `name`.
    pub fn dispatch(&self, name: &str, args: &[Bytes]) -> Option<String> {
        match self.entries.get(name) {
            Some(callback) => callback(args),
            None => {
                tracing::error!(entry = name, "no such entry point");
                None
            }
        }
    }

    /// Returns true if an entry point is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of registered entry points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry points are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_dispatch() {
        let mut registry = Registry::new();
        registry.register("ping", |_args: &[Bytes]| Some("pong".to_string()));

        assert!(registry.contains("ping"));
        assert_eq!(registry.dispatch("ping", &[]).as_deref(), Some("pong"));
    }

    #[test]
    fn test_unknown_entry_returns_none() {
        let registry = Registry::new();
        assert!(registry.dispatch("missing", &[]).is_none());
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry = Registry::new();
        registry.register("f", |_: &[Bytes]| Some("old".to_string()));
        registry.register("f", |_: &[Bytes]| Some("new".to_string()));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch("f", &[]).as_deref(), Some("new"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
