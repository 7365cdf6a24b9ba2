use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::config::GridConfig;
use crate::messages::{Msg, SyncMsg, UiMsg};
use crate::model::GridModel;
use crate::store::{LeadStore, Subscription};
use crate::update::update;

/// A mounted grid bound to a lead store
///
/// Owns the model, executes remote calls on worker threads and feeds their
/// completions back through a channel. The insert subscription lives exactly
/// as long as the mount.
pub struct GridRuntime<S: LeadStore> {
    model: GridModel,
    store: Arc<S>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    subscription: Option<Subscription>,
    in_flight: usize,
    needs_redraw: bool,
}

impl<S: LeadStore> GridRuntime<S> {
    pub fn new(store: Arc<S>, config: GridConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: GridModel::new(config),
            store,
            msg_tx,
            msg_rx,
            subscription: None,
            in_flight: 0,
            needs_redraw: false,
        }
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Remote calls started but not yet completed
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Subscribe to inserts and start the initial load
    pub fn mount(&mut self) {
        if self.is_mounted() {
            tracing::debug!("Grid already mounted");
            return;
        }

        let tx = Mutex::new(self.msg_tx.clone());
        let subscription = self.store.subscribe_inserts(Box::new(move |lead| {
            let tx = tx.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = tx.send(Msg::Sync(SyncMsg::Inserted(lead)));
        }));
        tracing::info!("Mounted grid with insert subscription {}", subscription.id());
        self.subscription = Some(subscription);

        self.dispatch(Msg::load());
    }

    /// Release the subscription and any dangling resize drag
    ///
    /// Inserts already queued from the subscription are discarded; remote
    /// call completions stay queued.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::info!("Unmounting grid");
            subscription.unsubscribe();

            let pending: Vec<Msg> = self.msg_rx.try_iter().collect();
            let mut discarded = 0;
            for msg in pending {
                if is_insert(&msg) {
                    discarded += 1;
                } else {
                    let _ = self.msg_tx.send(msg);
                }
            }
            if discarded > 0 {
                tracing::debug!("Discarded {} queued inserts on unmount", discarded);
            }
        }
        self.model.release_pointer();
    }

    /// Run one message through `update` and execute the resulting command
    ///
    /// Returns true if the grid needs a repaint.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        // A callback may still fire while the store releases the subscription
        if !self.is_mounted() && is_insert(&msg) {
            tracing::debug!("Ignoring insert for unmounted grid");
            return false;
        }
        if is_completion(&msg) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let Some(cmd) = update(&mut self.model, msg) else {
            return false;
        };
        let redraw = cmd.needs_redraw();
        self.needs_redraw |= redraw;
        self.process_cmd(cmd);
        redraw
    }

    /// Expire the error banner if its time is up
    pub fn tick(&mut self) -> bool {
        self.dispatch(Msg::Ui(UiMsg::Tick))
    }

    /// Take and reset the pending repaint flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Process every queued message without blocking
    pub fn pump(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            needs_redraw |= self.dispatch(msg);
        }
        needs_redraw
    }

    /// Block until no remote call is in flight or `timeout` passes
    ///
    /// Returns true if everything settled.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if self.in_flight == 0 {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!("{} remote calls still in flight after {:?}", self.in_flight, timeout);
                return false;
            }
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.dispatch(msg);
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!("{} remote calls still in flight after {:?}", self.in_flight, timeout);
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => return self.in_flight == 0,
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::RedrawAreas(_) => {}
            Cmd::FetchLeads => {
                self.in_flight += 1;
                let store = Arc::clone(&self.store);
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = store.fetch_all();
                    let _ = tx.send(Msg::Sync(SyncMsg::Loaded(result)));
                });
            }
            Cmd::UpdateField { id, field, value } => {
                self.in_flight += 1;
                let store = Arc::clone(&self.store);
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = store.update_field(&id, field, &value);
                    let _ = tx.send(Msg::Sync(SyncMsg::UpdateCompleted { id, field, result }));
                });
            }
            Cmd::DeleteLeads { ids } => {
                self.in_flight += 1;
                let store = Arc::clone(&self.store);
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = store.delete_by_ids(&ids);
                    let _ = tx.send(Msg::Sync(SyncMsg::DeleteCompleted { ids, result }));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

impl<S: LeadStore> Drop for GridRuntime<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Messages that answer a remote call started by `process_cmd`
fn is_completion(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::Sync(SyncMsg::Loaded(_))
            | Msg::Sync(SyncMsg::UpdateCompleted { .. })
            | Msg::Sync(SyncMsg::DeleteCompleted { .. })
    )
}

fn is_insert(msg: &Msg) -> bool {
    matches!(msg, Msg::Sync(SyncMsg::Inserted(_)))
}
