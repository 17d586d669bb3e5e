//! Window resize subscriptions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::surface::ChartError;

pub type ResizeCallback = Box<dyn FnMut()>;

/// Identifies one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// A source of resize notifications with explicit subscribe/unsubscribe
pub trait ResizeSource: Clone + 'static {
    fn subscribe(&self, callback: ResizeCallback) -> Result<ListenerId, ChartError>;

    /// Unknown ids are ignored
    fn unsubscribe(&self, id: ListenerId);
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    closures: HashMap<ListenerId, Closure<dyn FnMut()>>,
}

/// The browser window's `resize` event.
///
/// Keeps each JS closure alive until it is unsubscribed, so removal can hand
/// the exact same function back to `removeEventListener`.
#[derive(Clone, Default)]
pub struct WindowResize {
    listeners: Rc<RefCell<Listeners>>,
}

impl WindowResize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().closures.len()
    }
}

impl ResizeSource for WindowResize {
    fn subscribe(&self, callback: ResizeCallback) -> Result<ListenerId, ChartError> {
        let window = web_sys::window().ok_or(ChartError::NoWindow)?;
        let closure = Closure::<dyn FnMut()>::wrap(callback);

        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| ChartError::Listener(format!("{:?}", e)))?;

        let mut listeners = self.listeners.borrow_mut();
        let id = ListenerId(listeners.next_id);
        listeners.next_id += 1;
        listeners.closures.insert(id, closure);

        log::debug!("resize listener {:?} registered", id);
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let Some(closure) = self.listeners.borrow_mut().closures.remove(&id) else {
            return;
        };

        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove resize listener {:?}: {:?}", id, e);
            }
        }
        log::debug!("resize listener {:?} removed", id);
    }
}
