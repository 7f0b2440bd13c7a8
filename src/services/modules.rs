//! Module activation service
//!
//! Single source of truth for which feature modules are enabled and whether
//! onboarding has been completed. State lives in memory and is authoritative
//! for the running process; every change is mirrored to the preference store
//! in the background on a best-effort basis.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, info};

use super::observer::{PersistenceObserver, TracingObserver};
use super::persister::Persister;
use crate::models::{ActiveModuleSet, ModuleId, ModulesSnapshot};
use crate::storage::{PreferenceStore, ACTIVE_MODULES_KEY, ONBOARDING_KEY};

struct Inner {
    store: Arc<dyn PreferenceStore>,
    observer: Arc<dyn PersistenceObserver>,
    state: watch::Sender<ModulesSnapshot>,
    loading: watch::Sender<bool>,
    persister: Persister,
}

/// Owns the module selection and onboarding flag
///
/// Cheap to clone; clones share the same state. Must be created inside a
/// Tokio runtime because it spawns the write-through task.
#[derive(Clone)]
pub struct ModuleActivationService {
    inner: Arc<Inner>,
}

impl ModuleActivationService {
    /// Create a service over `store` that logs storage problems
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_observer(store, Arc::new(TracingObserver))
    }

    /// Create a service reporting storage problems to `observer`
    pub fn with_observer(
        store: Arc<dyn PreferenceStore>,
        observer: Arc<dyn PersistenceObserver>,
    ) -> Self {
        let (state, _) = watch::channel(ModulesSnapshot::default());
        let (loading, _) = watch::channel(true);
        let persister = Persister::spawn(Arc::clone(&store), Arc::clone(&observer));

        Self {
            inner: Arc::new(Inner {
                store,
                observer,
                state,
                loading,
                persister,
            }),
        }
    }

    /// Read both preferences from the store
    ///
    /// Each key falls back to its default on its own when absent or
    /// unreadable. Never fails. Once done, `is_loading` turns false and the
    /// loaded snapshot is written back, replacing any corrupt entry.
    pub async fn load(&self) {
        let active_modules: ActiveModuleSet = self.read_or_default(ACTIVE_MODULES_KEY).await;
        let has_completed_onboarding: bool = self.read_or_default(ONBOARDING_KEY).await;

        info!(
            modules = active_modules.len(),
            onboarded = has_completed_onboarding,
            "module preferences loaded"
        );

        let loaded = ModulesSnapshot {
            active_modules,
            has_completed_onboarding,
        };
        // Flip the loading flag under the state lock so a concurrent mutation
        // either lands before the loaded state or is persisted after it
        self.inner.state.send_modify(|snapshot| {
            *snapshot = loaded;
            self.inner.persister.enqueue(snapshot.clone());
            self.inner.loading.send_replace(false);
        });
    }

    /// Flip membership of `module`; returns whether it is active afterwards
    pub fn toggle_module(&self, module: ModuleId) -> bool {
        let mut now_active = false;
        self.mutate(|snapshot| now_active = snapshot.active_modules.toggle(module));
        debug!(module = %module, active = now_active, "module toggled");
        now_active
    }

    /// Replace the whole module selection
    pub fn set_active_modules<I>(&self, modules: I)
    where
        I: IntoIterator<Item = ModuleId>,
    {
        let modules: ActiveModuleSet = modules.into_iter().collect();
        self.mutate(|snapshot| snapshot.active_modules = modules);
    }

    /// Record whether onboarding has been completed
    pub fn set_onboarding_completed(&self, completed: bool) {
        self.mutate(|snapshot| snapshot.has_completed_onboarding = completed);
    }

    /// True until `load` has resolved
    pub fn is_loading(&self) -> bool {
        *self.inner.loading.borrow()
    }

    /// Watch the loading flag
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.inner.loading.subscribe()
    }

    /// Wait until `load` has resolved
    pub async fn wait_until_loaded(&self) {
        let mut loading = self.subscribe_loading();
        // The sender lives in `self`, so the channel cannot close here
        let _ = loading.wait_for(|is_loading| !*is_loading).await;
    }

    /// Watch every change to the snapshot
    pub fn subscribe(&self) -> watch::Receiver<ModulesSnapshot> {
        self.inner.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ModulesSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn active_modules(&self) -> ActiveModuleSet {
        self.inner.state.borrow().active_modules.clone()
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.inner.state.borrow().has_completed_onboarding
    }

    pub fn is_module_active(&self, module: ModuleId) -> bool {
        self.inner.state.borrow().active_modules.contains(module)
    }

    /// Wait until every change made so far has been handed to the store
    pub async fn flush(&self) {
        self.inner.persister.flush().await;
    }

    /// Write out pending changes and stop the write-through task
    ///
    /// Later mutations still apply in memory but are no longer persisted.
    pub async fn teardown(&self) {
        self.inner.persister.shutdown().await;
        debug!("module activation service torn down");
    }

    /// Apply `f` and queue the resulting snapshot under the same lock, so the
    /// writer sees snapshots in mutation order
    fn mutate(&self, f: impl FnOnce(&mut ModulesSnapshot)) {
        self.inner.state.send_modify(|snapshot| {
            f(snapshot);
            // Changes made before load resolves are replaced by the loaded state
            let persist = !*self.inner.loading.borrow();
            if persist && !self.inner.persister.enqueue(snapshot.clone()) {
                debug!("preference writer stopped; change kept in memory only");
            }
        });
    }

    async fn read_or_default<T>(&self, key: &'static str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.inner.store.get_item(key).await {
            Ok(None) => T::default(),
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    self.inner.observer.load_fallback(key, &e.into());
                    T::default()
                }
            },
            Err(e) => {
                self.inner.observer.load_fallback(key, &e);
                T::default()
            }
        }
    }
}
