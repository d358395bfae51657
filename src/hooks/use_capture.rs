use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::invoice::InvoiceDraft;
use crate::services::capture::{CapturePhase, CaptureSource};

/// Handle returned by `use_capture`.
#[derive(Clone, PartialEq)]
pub struct CaptureHandle {
    pub phase: CapturePhase,
    pub start: Callback<()>,
    pub reset: Callback<()>,
}

/// Drives one simulated capture run through its phase machine.
///
/// Each phase sleeps for its fixed duration, then advances. At `Complete` the
/// canned drafts are handed to `on_complete` and, after a short delay, the
/// phase falls back to `Idle`. Unmounting cancels the run: a stale timer
/// never touches state afterwards.
#[hook]
pub fn use_capture(
    source: CaptureSource,
    on_complete: Callback<Vec<InvoiceDraft>>,
) -> CaptureHandle {
    let phase = use_state(CapturePhase::default);
    let alive = use_mut_ref(|| true);

    {
        let alive = alive.clone();
        use_effect_with((), move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    let start = {
        let phase_handle = phase.clone();
        let alive = alive.clone();
        Callback::from(move |()| {
            if phase_handle.is_busy() {
                return;
            }

            let phase_handle = phase_handle.clone();
            let alive = alive.clone();
            let on_complete = on_complete.clone();

            spawn_local(async move {
                let mut current = CapturePhase::Idle.advance(source);
                phase_handle.set(current);

                while let Some(delay) = current.delay_ms(source) {
                    TimeoutFuture::new(delay).await;
                    if !*alive.borrow() {
                        return;
                    }
                    current = current.advance(source);
                    phase_handle.set(current);
                }

                on_complete.emit(source.results());

                TimeoutFuture::new(Config::CAPTURE_RESET_MS).await;
                if *alive.borrow() {
                    phase_handle.set(CapturePhase::Idle);
                }
            });
        })
    };

    let reset = {
        let phase = phase.clone();
        Callback::from(move |()| phase.set(CapturePhase::Idle))
    };

    CaptureHandle {
        phase: *phase,
        start,
        reset,
    }
}
