use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::ScrollState;
use crate::shared::logging::log_listener_unavailable;
use crate::shared::services::{PlatformScrollHost, ScrollSubscription};

/// Tracks viewport scroll progress for the lifetime of the calling component.
///
/// The listener is attached on first render (with one immediate reading) and
/// detached when the component unmounts.
pub fn use_scroll_progress() -> Signal<ScrollState> {
    let mut state = use_signal(ScrollState::default);

    let subscription = use_hook(move || {
        let subscription = match PlatformScrollHost::new() {
            Some(host) => Some(ScrollSubscription::attach(host, move |next| {
                if *state.peek() != next {
                    state.set(next);
                }
            })),
            None => {
                log_listener_unavailable("no window");
                None
            }
        };
        Rc::new(RefCell::new(subscription))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    state
}
