//! Runs the controller's effects against a backend.
//!
//! The session owns the [`QueryController`]. Effects run on a worker thread
//! and their outcome comes back on a channel, which the owner drains between
//! frames. Only the owning thread ever mutates the controller.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use talkdata_engine::{Effect, Msg, QueryController};
use talkdata_sdk::QueryBackend;
use talkdata_types::{ErrorInfo, QueryRequest};

pub struct QuerySession {
    controller: QueryController,
    backend: Arc<dyn QueryBackend>,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl QuerySession {
    pub fn new(backend: Arc<dyn QueryBackend>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            controller: QueryController::new(),
            backend,
            tx,
            rx,
        }
    }

    pub fn controller(&self) -> &QueryController {
        &self.controller
    }

    /// Apply a message; a resulting request is started in the background.
    /// Returns whether a request was started.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let Some(effect) = self.controller.update(msg) else {
            return false;
        };

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        thread::spawn(move || {
            // Every accepted submit must resolve, even if the backend panics.
            let resolution = panic::catch_unwind(AssertUnwindSafe(|| {
                execute(backend.as_ref(), effect)
            }))
            .unwrap_or_else(|_| {
                tracing::error!("query worker panicked");
                Msg::ResolvedError(ErrorInfo::fallback())
            });
            // The receiver is gone only when the UI has quit.
            let _ = tx.send(resolution);
        });
        true
    }

    /// Fill the question from the preset at `index`. Never submits.
    pub fn select_example(&mut self, index: usize) -> bool {
        self.controller.select_example_at(index)
    }

    /// Apply a message and run any resulting request on this thread.
    pub fn dispatch_blocking(&mut self, msg: Msg) {
        if let Some(effect) = self.controller.update(msg) {
            let resolution = execute(self.backend.as_ref(), effect);
            self.controller.update(resolution);
        }
    }

    /// Apply every resolution that has arrived. Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.controller.update(msg);
            applied += 1;
        }
        applied
    }
}

/// Run one effect and turn its outcome into the resolving message.
pub fn execute(backend: &dyn QueryBackend, effect: Effect) -> Msg {
    match effect {
        Effect::SendQuery(request) => resolve_query(backend, &request),
    }
}

fn resolve_query(backend: &dyn QueryBackend, request: &QueryRequest) -> Msg {
    let outcome = backend.query(request).map_err(|err| {
        tracing::warn!(error = %err, "query failed");
        err.error_info()
    });
    Msg::resolved(outcome)
}

#[cfg(test)]
impl QuerySession {
    fn wait_for_resolution(&mut self, timeout: std::time::Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.controller.update(msg);
                true
            }
            Err(_) => false,
        }
    }
}
