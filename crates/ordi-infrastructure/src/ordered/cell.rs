//! Once-only materialization cell
//!
//! ```text
//!            claim                 Ok
//! Pending ─────────► InProgress ─────────► Ready
//!    ▲                   │
//!    └──── Err (Retry) ──┤
//!          or panic      └── Err (Poison) ──► Poisoned
//! ```
//!
//! The state lock is never held while the materializer runs. Readers that
//! find the cell `InProgress` wait on the condvar until it settles.

use once_cell::sync::OnceCell;
use ordi_domain::error::{Error, Result};
use parking_lot::{Condvar, Mutex};

use super::options::FailurePolicy;

enum CellState {
    Pending,
    InProgress,
    Ready,
    Poisoned(String),
}

/// What a reader does after inspecting the state
enum Step {
    Claim,
    Wait,
    Ready,
    Poisoned(String),
}

/// Single-writer memoization cell
pub struct MaterializeCell<V> {
    label: &'static str,
    policy: FailurePolicy,
    state: Mutex<CellState>,
    settled: Condvar,
    value: OnceCell<V>,
}

impl<V> MaterializeCell<V> {
    /// Empty cell; `label` names the value in poison errors
    pub fn new(label: &'static str, policy: FailurePolicy) -> Self {
        Self {
            label,
            policy,
            state: Mutex::new(CellState::Pending),
            settled: Condvar::new(),
            value: OnceCell::new(),
        }
    }

    /// Cell that is already materialized
    pub fn ready(label: &'static str, value: V) -> Self {
        Self {
            label,
            policy: FailurePolicy::default(),
            state: Mutex::new(CellState::Ready),
            settled: Condvar::new(),
            value: OnceCell::with_value(value),
        }
    }

    /// The value, if materialized
    pub fn get(&self) -> Option<&V> {
        self.value.get()
    }

    /// Whether the value has been materialized
    pub fn is_ready(&self) -> bool {
        self.value.get().is_some()
    }

    /// Whether a failure poisoned the cell
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.lock(), CellState::Poisoned(_))
    }

    /// Return the value, running `materialize` if no one has yet
    ///
    /// At most one `materialize` runs at a time. Its error is returned to
    /// the caller that ran it unchanged.
    pub fn get_or_materialize<F>(&self, materialize: F) -> Result<&V>
    where
        F: FnOnce() -> Result<V>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        {
            let mut state = self.state.lock();
            loop {
                let step = match &*state {
                    CellState::Pending => Step::Claim,
                    CellState::InProgress => Step::Wait,
                    CellState::Ready => Step::Ready,
                    CellState::Poisoned(message) => Step::Poisoned(message.clone()),
                };
                match step {
                    Step::Claim => {
                        *state = CellState::InProgress;
                        break;
                    }
                    Step::Wait => self.settled.wait(&mut state),
                    Step::Ready => return self.settled_value(),
                    Step::Poisoned(message) => {
                        return Err(Error::view_poisoned(self.label, message));
                    }
                }
            }
        }

        let claim = Claim {
            cell: self,
            finished: false,
        };
        let outcome = materialize();
        claim.finish(outcome)
    }

    fn settled_value(&self) -> Result<&V> {
        self.value.get().ok_or_else(|| {
            Error::infrastructure(format!("{} settled without a value", self.label))
        })
    }
}

/// Ownership of the `InProgress` state
///
/// Dropping an unfinished claim (the materializer panicked) returns the
/// cell to `Pending` and wakes waiters.
struct Claim<'a, V> {
    cell: &'a MaterializeCell<V>,
    finished: bool,
}

impl<'a, V> Claim<'a, V> {
    fn finish(mut self, outcome: Result<V>) -> Result<&'a V> {
        let cell = self.cell;
        let mut state = cell.state.lock();
        let result = match outcome {
            Ok(value) => {
                // Only the claim holder writes the value
                let _ = cell.value.set(value);
                *state = CellState::Ready;
                cell.settled_value()
            }
            Err(error) => {
                *state = match cell.policy {
                    FailurePolicy::Retry => CellState::Pending,
                    FailurePolicy::Poison => CellState::Poisoned(error.to_string()),
                };
                Err(error)
            }
        };
        self.finished = true;
        drop(state);
        cell.settled.notify_all();
        result
    }
}

impl<V> Drop for Claim<'_, V> {
    fn drop(&mut self) {
        if !self.finished {
            *self.cell.state.lock() = CellState::Pending;
            self.cell.settled.notify_all();
        }
    }
}
