use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Cadence of the background re-fetch.
#[derive(Clone, PartialEq)]
pub struct RefreshConfig {
    pub interval_ms: u32,
    /// Optional stagger before the first tick.
    pub initial_delay_ms: Option<u32>,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: 30_000,
            initial_delay_ms: None,
        }
    }
}

/// Emit `refresh` on a fixed interval for as long as the component stays
/// mounted.
///
/// The loop is unconditional: it does not debounce against in-flight
/// mutations, so a tick may land right after a mutation's own re-fetch.
/// Both are wholesale-replace reads, so the race is benign. The unmount
/// cleanup flips `is_mounted` and the loop exits at its next wake-up.
#[hook]
pub fn use_periodic_refresh(config: RefreshConfig, refresh: Callback<()>) {
    // A plain ref, not state: the timer loop reads it after the component is
    // gone, when queued state updates would no longer apply.
    let is_mounted = use_mut_ref(|| true);

    {
        let is_mounted = is_mounted.clone();
        use_effect_with(config, move |config| {
            let config = config.clone();
            spawn_local(async move {
                if let Some(delay) = config.initial_delay_ms {
                    TimeoutFuture::new(delay).await;
                }
                loop {
                    TimeoutFuture::new(config.interval_ms).await;
                    if !*is_mounted.borrow() {
                        Logger::debug("periodic-refresh", "view unmounted, stopping timer");
                        break;
                    }
                    refresh.emit(());
                }
            });
            || ()
        });
    }

    {
        let is_mounted = is_mounted.clone();
        use_effect_with((), move |_| move || *is_mounted.borrow_mut() = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn config_defaults_to_thirty_seconds() {
        let config = RefreshConfig::default();
        assert_eq!(config.interval_ms, 30_000);
        assert_eq!(config.initial_delay_ms, None);
    }

    #[wasm_bindgen_test]
    fn config_supports_staggered_start() {
        let config = RefreshConfig {
            initial_delay_ms: Some(5_000),
            ..RefreshConfig::default()
        };
        assert_eq!(config.initial_delay_ms, Some(5_000));
    }
}
