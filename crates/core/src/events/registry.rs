// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry routing emitted payloads to the callbacks of a category

use super::callback::Callback;
use crate::config::{DeliveryPolicy, RegistryConfig};
use crate::error::{CallbackFailure, EmitError};
use indexmap::{Equivalent, IndexMap};
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

type Listeners<K, P> = IndexMap<K, Vec<Callback<P>>>;

/// Synchronous publish/subscribe registry
///
/// Maps each category to its callbacks in registration order. A category is
/// present only while it has at least one callback. Clones share state.
///
/// A callback that needs to reach back into its own registry should capture
/// a [`WeakRegistry`] from [`Registry::downgrade`]; capturing a clone keeps
/// the registry alive through its own callbacks and it is never dropped.
pub struct Registry<K, P> {
    listeners: Arc<RwLock<Listeners<K, P>>>,
    config: RegistryConfig,
}

/// Non-owning handle to a [`Registry`]
pub struct WeakRegistry<K, P> {
    listeners: Weak<RwLock<Listeners<K, P>>>,
    config: RegistryConfig,
}

impl<K, P> WeakRegistry<K, P> {
    /// The registry, if any owning handle is still alive
    pub fn upgrade(&self) -> Option<Registry<K, P>> {
        Some(Registry {
            listeners: self.listeners.upgrade()?,
            config: self.config.clone(),
        })
    }
}

impl<K, P> Clone for WeakRegistry<K, P> {
    fn clone(&self) -> Self {
        Self {
            listeners: Weak::clone(&self.listeners),
            config: self.config.clone(),
        }
    }
}

impl<K, P> fmt::Debug for WeakRegistry<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRegistry")
            .field("alive", &(self.listeners.strong_count() > 0))
            .finish()
    }
}

impl<K, P> Registry<K, P>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            listeners: Arc::new(RwLock::new(IndexMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Handle that does not keep the registry alive
    pub fn downgrade(&self) -> WeakRegistry<K, P> {
        WeakRegistry {
            listeners: Arc::downgrade(&self.listeners),
            config: self.config.clone(),
        }
    }

    /// Register a callback for a category
    ///
    /// Registering a callback already present for the category is a no-op.
    pub fn register(&self, category: K, callback: Callback<P>) {
        let mut listeners = self.write();
        if let Some(callbacks) = listeners.get(&category) {
            if callbacks.iter().any(|cb| cb.ptr_eq(&callback)) {
                tracing::trace!(%category, ?callback, "callback already registered");
                return;
            }
        }
        tracing::debug!(%category, ?callback, "callback registered");
        listeners.entry(category).or_default().push(callback);
    }

    /// Remove one callback from a category, dropping the category once empty
    pub fn unregister<Q>(&self, category: &Q, callback: &Callback<P>)
    where
        Q: ?Sized + Hash + Equivalent<K> + fmt::Display,
    {
        let mut listeners = self.write();
        let Some(callbacks) = listeners.get_mut(category) else {
            tracing::trace!(%category, "unregister on unknown category");
            return;
        };

        let before = callbacks.len();
        callbacks.retain(|cb| !cb.ptr_eq(callback));
        if callbacks.len() < before {
            tracing::debug!(%category, remaining = callbacks.len(), "callback unregistered");
        }
        if callbacks.is_empty() {
            listeners.shift_remove(category);
        }
    }

    /// Remove every callback registered for a category
    pub fn unregister_all<Q>(&self, category: &Q)
    where
        Q: ?Sized + Hash + Equivalent<K> + fmt::Display,
    {
        if let Some(removed) = self.write().shift_remove(category) {
            tracing::debug!(%category, removed = removed.len(), "category cleared");
        }
    }

    /// Deliver a payload to every callback registered for the category
    ///
    /// Callbacks run in registration order against a snapshot taken on entry;
    /// registrations made while delivering apply to later emissions only. No
    /// lock is held while callbacks run. Panics are not caught.
    pub fn emit<Q>(&self, category: &Q, payload: &P) -> Result<(), EmitError>
    where
        Q: ?Sized + Hash + Equivalent<K> + fmt::Display,
    {
        let snapshot = match self.read().get(category) {
            Some(callbacks) => callbacks.clone(),
            None => {
                tracing::trace!(%category, "emit with no callbacks");
                return Ok(());
            }
        };
        tracing::trace!(%category, callbacks = snapshot.len(), "emitting");

        match self.config.delivery {
            DeliveryPolicy::FailFast => {
                for (position, callback) in snapshot.iter().enumerate() {
                    if let Err(source) = callback.call(payload) {
                        return Err(EmitError::CallbackFailed {
                            category: category.to_string(),
                            failure: CallbackFailure { position, source },
                        });
                    }
                }
                Ok(())
            }
            DeliveryPolicy::Collect => {
                let mut failures = Vec::new();
                for (position, callback) in snapshot.iter().enumerate() {
                    if let Err(source) = callback.call(payload) {
                        tracing::warn!(%category, position, error = %source, "callback failed");
                        failures.push(CallbackFailure { position, source });
                    }
                }
                if failures.is_empty() {
                    Ok(())
                } else {
                    Err(EmitError::Aggregate {
                        category: category.to_string(),
                        delivered: snapshot.len(),
                        failures,
                    })
                }
            }
        }
    }

    /// Categories with at least one callback, in first-registration order
    pub fn all_event_types(&self) -> Vec<K> {
        self.read().keys().cloned().collect()
    }

    /// Callbacks registered for a category, in registration order
    ///
    /// The returned vector is a copy; changing it does not affect the registry.
    pub fn callbacks_by_event_type<Q>(&self, category: &Q) -> Vec<Callback<P>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.read().get(category).cloned().unwrap_or_default()
    }

    pub fn callback_count<Q>(&self, category: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.read().get(category).map_or(0, Vec::len)
    }

    pub fn is_registered<Q>(&self, category: &Q, callback: &Callback<P>) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.read()
            .get(category)
            .is_some_and(|callbacks| callbacks.iter().any(|cb| cb.ptr_eq(callback)))
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Listeners<K, P>> {
        self.listeners.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Listeners<K, P>> {
        self.listeners.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<K, P> Default for Registry<K, P>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> Clone for Registry<K, P> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
            config: self.config.clone(),
        }
    }
}

impl<K: fmt::Debug, P> fmt::Debug for Registry<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("Registry")
            .field("listeners", &*listeners)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
