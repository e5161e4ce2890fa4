//! Serializes observer callbacks against `stop()`.
//!
//! Observers live inside a mutex. Delivery holds the lock for the duration
//! of the callback; closing takes the lock and drops the observers, so once
//! `close` returns nothing can be delivered. A thread that is itself inside
//! a callback of this gate skips the wait and the observers are dropped as
//! soon as that callback returns.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use pimate_common::{PollError, SystemSnapshot};

pub(crate) type UpdateFn = Box<dyn FnMut(SystemSnapshot) + Send>;
pub(crate) type ErrorFn = Box<dyn FnMut(PollError) + Send>;

struct Observers {
    on_update: UpdateFn,
    on_error: ErrorFn,
}

thread_local! {
    /// Address of the gate whose callback is running on this thread, or 0.
    static DELIVERING: Cell<usize> = const { Cell::new(0) };
}

/// Marks this thread as inside a callback; restored on drop, even on panic.
struct Delivering(usize);

impl Delivering {
    fn enter(addr: usize) -> Self {
        Self(DELIVERING.with(|d| d.replace(addr)))
    }
}

impl Drop for Delivering {
    fn drop(&mut self) {
        DELIVERING.with(|d| d.set(self.0));
    }
}

pub(crate) struct DeliveryGate {
    open: AtomicBool,
    observers: Mutex<Option<Observers>>,
    latest: RwLock<Option<SystemSnapshot>>,
}

impl DeliveryGate {
    pub(crate) fn new(on_update: UpdateFn, on_error: ErrorFn) -> Self {
        Self {
            open: AtomicBool::new(true),
            observers: Mutex::new(Some(Observers {
                on_update,
                on_error,
            })),
            latest: RwLock::new(None),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub(crate) fn latest(&self) -> Option<SystemSnapshot> {
        *self.latest.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish one tick's result. A no-op once the gate is closed.
    pub(crate) fn deliver(&self, result: Result<SystemSnapshot, PollError>) {
        let mut observers = self.lock_observers();
        if !self.is_open() {
            *observers = None;
            return;
        }
        let Some(obs) = observers.as_mut() else {
            return;
        };

        {
            let _delivering = Delivering::enter(self.addr());
            match result {
                Ok(snapshot) => {
                    *self.latest.write().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
                    (obs.on_update)(snapshot);
                }
                Err(error) => (obs.on_error)(error),
            }
        }

        // stop() called from inside the callback could not take the lock.
        if !self.is_open() {
            *observers = None;
        }
    }

    /// Close the gate. Returns `true` if it was open.
    pub(crate) fn close(&self) -> bool {
        let was_open = self.open.swap(false, Ordering::SeqCst);
        let reentrant = DELIVERING.with(|d| d.get() == self.addr());
        if !reentrant {
            *self.lock_observers() = None;
        }
        was_open
    }

    fn lock_observers(&self) -> MutexGuard<'_, Option<Observers>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn addr(&self) -> usize {
        self as *const Self as usize
    }
}
