//! Camera stream acquisition for the scanner preview.
//!
//! The stream is only ever displayed: frames are never decoded. Acquiring it
//! is the one real resource in the app, and every acquired stream must be
//! released with [`stop_stream`] when scanning stops or the component
//! unmounts.

use wasm_bindgen_futures::JsFuture;
use web_sys::wasm_bindgen::{JsCast, JsValue};
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::models::error::AppError;

/// Requests a video-only media stream from the browser.
pub async fn request_video_stream() -> Result<MediaStream, AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::CameraError("janela do navegador indisponível".to_string()))?;

    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| AppError::CameraError("captura de mídia não suportada".to_string()))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| AppError::CameraError(format!("{e:?}")))?;

    let stream = JsFuture::from(promise)
        .await
        .map_err(|_| AppError::CameraError("acesso à câmera negado".to_string()))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| AppError::CameraError("resposta inesperada do navegador".to_string()))
}

/// Stops every track of the stream, releasing the camera.
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
