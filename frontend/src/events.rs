//! Listener and observer registration with teardown on drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::error::Result;

/// An event subscription. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Subscribes `handler` to `event` on `target`. The event is handed to the
/// handler as `E` without a runtime check, so `E` must match what the
/// browser dispatches for that event name.
pub fn subscribe<E, F>(
    target: &EventTarget,
    event: &'static str,
    mut handler: F,
) -> Result<Listener>
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        handler(event.unchecked_into::<E>());
    });
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

    Ok(Listener {
        target: target.clone(),
        event,
        callback,
    })
}

impl Listener {
    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Keeps the listener for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        let _ = self.target.remove_event_listener_with_callback(self.event, callback);
    }
}

/// An `IntersectionObserver` together with the closure backing it.
/// Dropping it disconnects the observer.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

pub fn observe_intersections<F>(
    options: &IntersectionObserverInit,
    mut handler: F,
) -> Result<Observer>
where
    F: FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                handler(entry.unchecked_into::<IntersectionObserverEntry>(), &observer);
            }
        },
    );
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;

    Ok(Observer {
        observer,
        _callback: callback,
    })
}

impl Observer {
    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
