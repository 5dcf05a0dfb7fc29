// =============================================================================
// Talevo Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Loading Spinner
// 2. Empty State
// 3. Stat Counter
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

// -----------------------------------------------------------------------------
// 1. Loading Spinner
// -----------------------------------------------------------------------------

/// Block loading indicator.
#[component]
pub fn LoadingSpinner(
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    view! {
        <div id=id class="loading-container">
            <div class="loader"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Empty State
// -----------------------------------------------------------------------------

/// Panel shown when there is nothing to list.
#[component]
pub fn EmptyState(
    #[prop(optional, into)] id: String,
    #[prop(into)] title: String,
    #[prop(into)] hint: String,
) -> impl IntoView {
    view! {
        <div id=id class="empty-state">
            <i class="bi bi-briefcase empty-icon"></i>
            <h3>{title}</h3>
            <p>{hint}</p>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Stat Counter
// -----------------------------------------------------------------------------

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

/// Linear count-up from zero to `target` over `COUNTER_DURATION_MS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        let ticks = f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_TICK_MS);
        Self {
            target,
            step: f64::from(target) / ticks,
            current: 0.0,
        }
    }

    /// Advance one tick. Returns the value to show and whether it is final.
    pub fn tick(&mut self) -> (u32, bool) {
        self.current += self.step;
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
            return (self.target, true);
        }
        (self.current.floor() as u32, false)
    }
}

/// Hero statistic that counts up once mounted.
#[component]
pub fn StatCounter(
    target: u32,
    #[prop(into)] label: String,
    #[prop(optional, into)] suffix: String,
) -> impl IntoView {
    let shown = RwSignal::new(0u32);

    if target > 0 {
        spawn_local(async move {
            let mut animation = CounterAnimation::new(target);
            loop {
                TimeoutFuture::new(COUNTER_TICK_MS).await;
                let (value, done) = animation.tick();
                // Stop early if the page was navigated away from
                if shown.try_set(value).is_some() || done {
                    break;
                }
            }
        });
    }

    view! {
        <div class="stat">
            <span class="stat-number">{move || shown.get()}{suffix}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_reaches_target_in_duration() {
        let mut animation = CounterAnimation::new(1000);
        let mut ticks = 0;
        loop {
            ticks += 1;
            let (value, done) = animation.tick();
            if done {
                assert_eq!(value, 1000);
                break;
            }
        }
        assert_eq!(ticks, 125);
    }

    #[test]
    fn test_counter_is_monotonic_and_bounded() {
        let mut animation = CounterAnimation::new(37);
        let mut last = 0;
        for _ in 0..200 {
            let (value, done) = animation.tick();
            assert!(value >= last);
            assert!(value <= 37);
            last = value;
            if done {
                break;
            }
        }
        assert_eq!(last, 37);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        assert_eq!(CounterAnimation::new(0).tick(), (0, true));
    }
}
