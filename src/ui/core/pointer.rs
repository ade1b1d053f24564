//! Outside-click subscriptions.
//!
//! Popups that must close when the user clicks elsewhere register with the
//! shared [`PointerWatch`] while they are open. The returned
//! [`OutsideClickGuard`] owns the registration: dropping it (on close, or when
//! the widget itself is dropped) removes the listener, so listeners never
//! outlive the popup that created them.

use ratatui::layout::{Position, Rect};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Listener {
    bounds: Vec<Rect>,
    triggered: bool,
}

type Listeners = RefCell<HashMap<Uuid, Listener>>;

/// Registry of active outside-click listeners, shared by every widget of one app
#[derive(Clone, Default)]
pub struct PointerWatch {
    listeners: Rc<Listeners>,
}

impl PointerWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener. It stays active until the guard is dropped.
    pub fn subscribe(&self) -> OutsideClickGuard {
        let id = Uuid::new_v4();
        self.listeners.borrow_mut().insert(id, Listener::default());
        OutsideClickGuard {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Report a pointer press. Every listener whose bounds do not contain the
    /// point is flagged; listeners with no recorded bounds are skipped.
    /// Returns the number of listeners flagged.
    pub fn dispatch(&self, column: u16, row: u16) -> usize {
        let position = Position::new(column, row);
        let mut flagged = 0;
        for listener in self.listeners.borrow_mut().values_mut() {
            if listener.bounds.is_empty() {
                continue;
            }
            if !listener.bounds.iter().any(|rect| rect.contains(position)) {
                listener.triggered = true;
                flagged += 1;
            }
        }
        flagged
    }
}

impl std::fmt::Debug for PointerWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerWatch")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped registration returned by [`PointerWatch::subscribe`]
#[derive(Debug)]
pub struct OutsideClickGuard {
    id: Uuid,
    listeners: Weak<Listeners>,
}

impl OutsideClickGuard {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Replace the areas considered "inside" the subscriber
    pub fn set_bounds(&self, bounds: &[Rect]) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Some(listener) = listeners.borrow_mut().get_mut(&self.id) {
                listener.bounds = bounds.to_vec();
            }
        }
    }

    /// Whether an outside press happened since the last call
    pub fn take_triggered(&self) -> bool {
        self.listeners
            .upgrade()
            .and_then(|listeners| {
                listeners
                    .borrow_mut()
                    .get_mut(&self.id)
                    .map(|listener| std::mem::take(&mut listener.triggered))
            })
            .unwrap_or(false)
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        // Guards are only dropped from component code, never while dispatch
        // holds the map, so the borrow is always free here
        if let Some(listeners) = self.listeners.upgrade() {
            let removed = listeners.try_borrow_mut().map(|mut listeners| listeners.remove(&self.id));
            debug_assert!(removed.is_ok(), "pointer listeners borrowed while dropping a guard");
        }
    }
}
