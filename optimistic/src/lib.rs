//! Rollback-capable optimistic edits.
//!
//! Each editable field gets its own [`OptimisticCell`]: a confirmed value plus
//! an optional pending overlay. Renders read `pending ?? confirmed`, so an
//! edit shows up the instant it is submitted and disappears (back to the last
//! confirmed value) if the mutation is rejected. Cells are independent, so
//! any number of edits may be in flight at once; there is no cross-cell
//! ordering and last-settled-wins on a cell is acceptable because each cell
//! backs a single disjoint field.

use std::sync::{Arc, Mutex};

/// Sink for user-visible failure notifications. Fired exactly once per
/// rejected mutation.
pub trait Notify {
    fn error(&self, message: &str);
}

struct State<V> {
    confirmed: V,
    pending: Option<V>,
}

pub struct OptimisticCell<V> {
    state: Arc<Mutex<State<V>>>,
}

impl<V> Clone for OptimisticCell<V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<V> OptimisticCell<V>
where
    V: Clone,
{
    pub fn new(confirmed: V) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                confirmed,
                pending: None,
            })),
        }
    }

    /// The value to render: the pending overlay if an edit is in flight,
    /// otherwise the last confirmed value.
    pub fn get(&self) -> V {
        let state = self.lock();
        state.pending.clone().unwrap_or_else(|| state.confirmed.clone())
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending.is_some()
    }

    /// Run one optimistic edit: overlay `assumed` synchronously, then await
    /// the mutation. Success promotes `assumed` to confirmed (the server is
    /// taken to have accepted exactly the submitted value); rejection drops
    /// the overlay and notifies once. The optimistic render always precedes
    /// the network call, and settlement always follows it.
    pub async fn submit<Fut, N>(&self, assumed: V, mutation: Fut, notifier: &N)
    where
        Fut: Future<Output = Result<(), String>>,
        N: Notify,
    {
        self.lock().pending = Some(assumed.clone());

        match mutation.await {
            Ok(()) => {
                let mut state = self.lock();
                state.confirmed = assumed;
                state.pending = None;
            }
            Err(message) => {
                self.lock().pending = None;
                tracing::info!(%message, "optimistic edit rejected");
                notifier.error(&message);
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State<V>> {
        // a poisoned cell only ever holds plain values; propagating the
        // panic to every other edit would be worse than continuing
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
