use dioxus::core::Task;
use dioxus::prelude::*;

use crate::config::SpringConfig;
use crate::domain::services::Spring;
use crate::shared::logging::log_spring_settled;
use crate::shared::services::FrameClock;

/// Spring-smoothed follower of `target`.
///
/// Each new target cancels the running animation and starts a fresh frame
/// loop from the current position and velocity. `None` targets are ignored,
/// so the value holds still until something has been measured.
pub fn use_spring(target: Memo<Option<f64>>, config: SpringConfig) -> Signal<f64> {
    let mut value = use_signal(|| 0.0);
    let mut spring = use_signal(|| Spring::new(config));
    let mut animation = use_signal(|| None::<Task>);

    use_effect(move || {
        let Some(next) = target() else {
            return;
        };

        if let Some(task) = animation.take() {
            task.cancel();
        }

        let settled = {
            let mut spring = spring.write();
            spring.set_target(next);
            spring.settle_if_resting()
        };
        if settled {
            value.set(next);
            return;
        }

        animation.set(Some(spawn(async move {
            let mut clock = FrameClock::start();
            let mut frames = 0usize;
            loop {
                let dt = clock.tick().await;
                frames += 1;

                let (settled, current) = {
                    let mut spring = spring.write();
                    (spring.step(dt), spring.value())
                };
                value.set(current);

                if settled {
                    log_spring_settled(current, frames);
                    break;
                }
            }
        })));
    });

    value
}
