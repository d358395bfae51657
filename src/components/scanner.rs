use yew::prelude::*;

use crate::hooks::use_camera::{CameraState, use_camera};
use crate::services::capture::CaptureSource;

#[derive(Properties, PartialEq)]
pub struct CameraPreviewProps {
    /// Which placeholder to show while idle (barcode lines or QR frame).
    pub source: CaptureSource,
    /// Whether a scan is running and the camera should be live.
    pub active: bool,
}

/// Live camera preview for the scanners.
///
/// The stream is display-only: frames are never decoded, and the hook behind
/// this releases the camera as soon as `active` drops or the component
/// unmounts.
#[function_component(CameraPreview)]
pub fn camera_preview(props: &CameraPreviewProps) -> Html {
    let video_ref = use_node_ref();
    let camera = use_camera(video_ref.clone(), props.active);

    if let CameraState::Denied(_) = &*camera {
        return html! {
            <div class="camera-error">
                {"Sem acesso à câmera. Por favor, permita o acesso à câmera para escanear."}
            </div>
        };
    }

    let live = matches!(&*camera, CameraState::Ready);

    html! {
        <div class="camera-preview">
            <video
                ref={video_ref}
                class={if live { "camera-feed" } else { "camera-feed hidden" }}
                autoplay={true}
                playsinline={true}
                muted={true}
            />
            if !live {
                <div class="camera-placeholder">
                    { placeholder_icon(props.source) }
                    <p class="muted">{props.source.label()}</p>
                    if matches!(&*camera, CameraState::Requesting) {
                        <p class="muted">{"Verificando permissões de câmera..."}</p>
                    }
                </div>
            }
        </div>
    }
}

fn placeholder_icon(source: CaptureSource) -> Html {
    match source {
        CaptureSource::QrCode => html! {
            <svg width="64" height="64" viewBox="0 0 24 24" fill="none"
                stroke="currentColor" stroke-width="1"
                stroke-linecap="round" stroke-linejoin="round">
                <rect width="14" height="14" x="5" y="5" rx="1" />
                <path d="M9 9h1v1H9z" />
                <path d="M14 9h1v1h-1z" />
                <path d="M9 14h1v1H9z" />
                <path d="M14 14h1v1h-1z" />
            </svg>
        },
        _ => html! {
            <svg width="64" height="32" viewBox="0 0 24 24" fill="none"
                stroke="currentColor" stroke-width="1"
                stroke-linecap="round" stroke-linejoin="round">
                <path d="M3 5v14" />
                <path d="M8 5v14" />
                <path d="M12 5v14" />
                <path d="M17 5v14" />
                <path d="M21 5v14" />
            </svg>
        },
    }
}
