use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::services::camera::{request_video_stream, stop_stream};

#[derive(Clone, Debug, PartialEq)]
pub enum CameraState {
    Idle,
    Requesting,
    Ready,
    Denied(String),
}

/// Attaches a live camera stream to `video_ref` while `active` is true.
///
/// The stream is released (tracks stopped) when scanning stops or the
/// component unmounts. Frames are never read back.
#[hook]
pub fn use_camera(video_ref: NodeRef, active: bool) -> UseStateHandle<CameraState> {
    let state = use_state(|| CameraState::Idle);

    {
        let state = state.clone();
        use_effect_with((video_ref, active), move |(video_ref, active)| {
            let cancelled = Rc::new(Cell::new(false));
            let stream_slot = Rc::new(std::cell::RefCell::new(None));

            if *active {
                state.set(CameraState::Requesting);

                let video_ref = video_ref.clone();
                let state = state.clone();
                let cancelled_task = cancelled.clone();
                let stream_slot_task = stream_slot.clone();

                spawn_local(async move {
                    match request_video_stream().await {
                        Ok(stream) => {
                            // The effect may already be torn down by the time
                            // the permission prompt resolves.
                            if cancelled_task.get() {
                                stop_stream(&stream);
                                return;
                            }
                            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                                video.set_src_object(Some(&stream));
                            }
                            *stream_slot_task.borrow_mut() = Some(stream);
                            state.set(CameraState::Ready);
                        }
                        Err(e) => {
                            if !cancelled_task.get() {
                                state.set(CameraState::Denied(e.to_string()));
                            }
                        }
                    }
                });
            } else {
                state.set(CameraState::Idle);
            }

            move || {
                cancelled.set(true);
                if let Some(stream) = stream_slot.borrow_mut().take() {
                    stop_stream(&stream);
                }
            }
        });
    }

    state
}
