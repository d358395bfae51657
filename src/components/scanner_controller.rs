use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::scanner::CameraPreview;
use crate::hooks::use_capture::use_capture;
use crate::hooks::use_toast::use_toast;
use crate::models::invoice::InvoiceDraft;
use crate::services::capture::{CapturePhase, CaptureSource};

#[derive(Properties, PartialEq)]
pub struct ScannerControllerProps {
    /// `Barcode` or `QrCode`; decides the preview placeholder and payload.
    pub source: CaptureSource,
    pub on_scan_complete: Callback<InvoiceDraft>,
}

/// Camera preview plus the capture button driving one simulated scan.
///
/// Whatever the camera sees, the canned record for the source is what comes
/// out: the preview is cosmetic.
#[function_component(ScannerController)]
pub fn scanner_controller(props: &ScannerControllerProps) -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toast();

    let on_complete = {
        let on_scan_complete = props.on_scan_complete.clone();
        let toasts = toasts.clone();
        Callback::from(move |mut drafts: Vec<InvoiceDraft>| {
            if let Some(draft) = drafts.pop() {
                toasts.success(
                    "Escaneamento concluído",
                    &format!("Fatura de {} detectada com sucesso.", draft.creditor),
                );
                on_scan_complete.emit(draft);
            }
        })
    };

    let capture = use_capture(props.source, on_complete);

    let hint = match props.source {
        CaptureSource::QrCode => "Posicione o QR Code PIX dentro da área de captura.",
        _ => "Posicione o código de barras do boleto dentro da área de captura.",
    };

    let on_start = {
        let start = capture.start.clone();
        Callback::from(move |_| start.emit(()))
    };

    let on_done = Callback::from(move |_| navigator.push(&Route::Dashboard));

    html! {
        <div class="scanner-pane">
            <CameraPreview
                source={props.source}
                active={capture.phase == CapturePhase::Scanning}
            />
            <p class="muted scanner-hint">{hint}</p>

            {
                match capture.phase {
                    CapturePhase::Idle => html! {
                        <button class="btn-primary wide" onclick={on_start}>
                            {"📷 Iniciar Captura"}
                        </button>
                    },
                    CapturePhase::Complete => html! {
                        <button class="btn-success wide" onclick={on_done}>
                            {"✓ Escaneamento Concluído"}
                        </button>
                    },
                    busy => html! {
                        <button class="btn-primary wide" disabled=true>
                            {busy.label()}
                        </button>
                    },
                }
            }
        </div>
    }
}
