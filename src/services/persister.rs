//! Write-through task for module preferences
//!
//! Mutations hand full snapshots to a single background task over an
//! unbounded channel, so callers never wait on storage. Snapshots queued
//! behind a slow write are collapsed into the newest one before writing.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::observer::PersistenceObserver;
use crate::error::BizbookError;
use crate::models::ModulesSnapshot;
use crate::storage::{PreferenceStore, ACTIVE_MODULES_KEY, ONBOARDING_KEY};

enum PersistRequest {
    Write(ModulesSnapshot),
    Flush(oneshot::Sender<()>),
}

/// Handle to the background writer
pub(crate) struct Persister {
    sender: Mutex<Option<mpsc::UnboundedSender<PersistRequest>>>,
    task: tokio::sync::Mutex<Option<JoinHandle<()>>>,
}

impl Persister {
    /// Spawn the writer on the current Tokio runtime
    pub(crate) fn spawn(
        store: Arc<dyn PreferenceStore>,
        observer: Arc<dyn PersistenceObserver>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_writer(store, observer, rx));

        Self {
            sender: Mutex::new(Some(tx)),
            task: tokio::sync::Mutex::new(Some(task)),
        }
    }

    /// Queue a snapshot; returns false once the writer has been shut down
    pub(crate) fn enqueue(&self, snapshot: ModulesSnapshot) -> bool {
        self.send(PersistRequest::Write(snapshot))
    }

    /// Wait until every snapshot queued before this call has been written
    pub(crate) async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.send(PersistRequest::Flush(ack_tx)) {
            let _ = ack_rx.await;
        }
    }

    /// Close the queue, let the writer drain it, and wait for it to exit
    pub(crate) async fn shutdown(&self) {
        drop(
            self.sender
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take(),
        );

        let task = self.task.lock().await.take();
        if let Some(task) = task {
            if let Err(e) = task.await {
                warn!(error = %e, "preference writer task ended abnormally");
            }
        }
    }

    fn send(&self, request: PersistRequest) -> bool {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        match sender.as_ref() {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        }
    }
}

async fn run_writer(
    store: Arc<dyn PreferenceStore>,
    observer: Arc<dyn PersistenceObserver>,
    mut rx: mpsc::UnboundedReceiver<PersistRequest>,
) {
    while let Some(request) = rx.recv().await {
        let mut latest = None;
        let mut acks = Vec::new();

        let mut collect = |request: PersistRequest| match request {
            PersistRequest::Write(snapshot) => latest = Some(snapshot),
            PersistRequest::Flush(ack) => acks.push(ack),
        };

        collect(request);
        while let Ok(next) = rx.try_recv() {
            collect(next);
        }

        if let Some(snapshot) = latest {
            write_snapshot(store.as_ref(), observer.as_ref(), &snapshot).await;
        }

        for ack in acks {
            let _ = ack.send(());
        }
    }

    debug!("preference writer stopped");
}

/// Write both entries of `snapshot`; each key succeeds or fails on its own
pub(crate) async fn write_snapshot(
    store: &dyn PreferenceStore,
    observer: &dyn PersistenceObserver,
    snapshot: &ModulesSnapshot,
) {
    let mut ok = true;

    match serde_json::to_string(&snapshot.active_modules) {
        Ok(value) => {
            if let Err(e) = store.set_item(ACTIVE_MODULES_KEY, &value).await {
                observer.persist_failed(ACTIVE_MODULES_KEY, &e);
                ok = false;
            }
        }
        Err(e) => {
            observer.persist_failed(ACTIVE_MODULES_KEY, &BizbookError::from(e));
            ok = false;
        }
    }

    let flag = if snapshot.has_completed_onboarding {
        "true"
    } else {
        "false"
    };
    if let Err(e) = store.set_item(ONBOARDING_KEY, flag).await {
        observer.persist_failed(ONBOARDING_KEY, &e);
        ok = false;
    }

    if ok {
        observer.persisted(snapshot);
    }
}
