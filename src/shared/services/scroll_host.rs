//! Viewport scroll subscription.
//!
//! [`ScrollHost`] is the seam between the tracker and whatever owns the scroll
//! signal (the browser window on WASM). [`ScrollSubscription`] holds the
//! listener for as long as it lives and detaches it on drop.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::models::{ScrollMetrics, ScrollState};
use crate::domain::services::compute_scroll_state;
use crate::shared::logging::{log_listener_attached, log_listener_detached, log_listener_unavailable};

pub type ScrollCallback = Box<dyn FnMut(ScrollMetrics)>;

pub trait ScrollHost {
    /// Whatever is needed to remove the listener again
    type Handle;

    /// Current readings, `None` if the viewport cannot be queried
    fn read(&self) -> Option<ScrollMetrics>;

    /// Register a passive scroll listener
    fn attach(&self, callback: ScrollCallback) -> Option<Self::Handle>;

    fn detach(&self, handle: Self::Handle);
}

/// Scoped scroll listener. Publishes [`ScrollState`] until dropped.
pub struct ScrollSubscription<H: ScrollHost> {
    host: H,
    handle: Option<H::Handle>,
}

impl<H: ScrollHost> ScrollSubscription<H> {
    /// Attach a listener and publish one reading immediately
    pub fn attach(host: H, on_change: impl FnMut(ScrollState) + 'static) -> Self {
        let on_change = Rc::new(RefCell::new(on_change));

        if let Some(metrics) = host.read() {
            (*on_change.borrow_mut())(compute_scroll_state(metrics));
        }

        let publish = on_change.clone();
        let handle = host.attach(Box::new(move |metrics| {
            (*publish.borrow_mut())(compute_scroll_state(metrics));
        }));

        match handle {
            Some(_) => log_listener_attached(),
            None => log_listener_unavailable("host refused scroll listener"),
        }

        Self { host, handle }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H: ScrollHost> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.detach(handle);
            log_listener_detached();
        }
    }
}

/// Browser window as scroll host
#[cfg(target_arch = "wasm32")]
pub use web::WindowScrollHost as PlatformScrollHost;

/// No viewport outside the browser: progress stays at 0
#[cfg(not(target_arch = "wasm32"))]
pub use self::NoScrollHost as PlatformScrollHost;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ScrollCallback, ScrollHost};
    use crate::domain::models::ScrollMetrics;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    #[derive(Clone)]
    pub struct WindowScrollHost {
        window: web_sys::Window,
    }

    impl WindowScrollHost {
        pub fn new() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }
    }

    impl ScrollHost for WindowScrollHost {
        type Handle = Closure<dyn FnMut(web_sys::Event)>;

        fn read(&self) -> Option<ScrollMetrics> {
            let scroll_y = self.window.scroll_y().ok()?;
            let viewport_height = self.window.inner_height().ok()?.as_f64()?;
            let scroll_height = self
                .window
                .document()?
                .document_element()?
                .scroll_height() as f64;

            Some(ScrollMetrics::new(scroll_y, scroll_height, viewport_height))
        }

        fn attach(&self, mut callback: ScrollCallback) -> Option<Self::Handle> {
            let reader = self.clone();
            let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(metrics) = reader.read() {
                    callback(metrics);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);

            self.window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                    &options,
                )
                .ok()?;

            Some(listener)
        }

        fn detach(&self, handle: Self::Handle) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScrollHost;

#[cfg(not(target_arch = "wasm32"))]
impl NoScrollHost {
    pub fn new() -> Option<Self> {
        Some(Self)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScrollHost for NoScrollHost {
    type Handle = ();

    fn read(&self) -> Option<ScrollMetrics> {
        None
    }

    fn attach(&self, _callback: ScrollCallback) -> Option<Self::Handle> {
        None
    }

    fn detach(&self, _handle: Self::Handle) {}
}
