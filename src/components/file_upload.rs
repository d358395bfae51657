use web_sys::{DragEvent, File, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_capture::use_capture;
use crate::hooks::use_toast::use_toast;
use crate::models::invoice::InvoiceDraft;
use crate::services::capture::{CapturePhase, CaptureSource, validate_upload};

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub on_upload_complete: Callback<InvoiceDraft>,
}

/// Drag-and-drop / file-picker upload area.
///
/// Type and size are checked locally; the content itself is never parsed.
/// After the simulated upload and extraction, the canned record comes back.
#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let dragging = use_state(|| false);
    let selected = use_state(|| Option::<(String, f64)>::None);
    let input_ref = use_node_ref();
    let toasts = use_toast();

    let on_complete = {
        let on_upload_complete = props.on_upload_complete.clone();
        let selected = selected.clone();
        let toasts = toasts.clone();
        Callback::from(move |mut drafts: Vec<InvoiceDraft>| {
            selected.set(None);
            if let Some(draft) = drafts.pop() {
                toasts.success(
                    "Processamento concluído",
                    &format!("Fatura de {} extraída com sucesso.", draft.creditor),
                );
                on_upload_complete.emit(draft);
            }
        })
    };

    let capture = use_capture(CaptureSource::Upload, on_complete);

    let handle_file = {
        let selected = selected.clone();
        let start = capture.start.clone();
        let toasts = toasts.clone();
        Callback::from(move |file: File| {
            if let Err(e) = validate_upload(&file.type_(), file.size()) {
                toasts.error("Arquivo recusado", &e.to_string());
                return;
            }
            selected.set(Some((file.name(), file.size())));
            start.emit(());
        })
    };

    let on_input_change = {
        let handle_file = handle_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.item(0)) {
                handle_file.emit(file);
            }
        })
    };

    let on_drop = {
        let dragging = dragging.clone();
        let handle_file = handle_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            if let Some(file) = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.item(0))
            {
                handle_file.emit(file);
            }
        })
    };

    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };

    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |_| dragging.set(false))
    };

    let on_pick = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let class = if *dragging {
        "upload-area dragging"
    } else {
        "upload-area"
    };

    html! {
        <div {class} ondrop={on_drop} ondragover={on_drag_over} ondragleave={on_drag_leave}>
            <input
                ref={input_ref}
                type="file"
                accept=".pdf,.jpg,.jpeg,.png"
                class="hidden"
                onchange={on_input_change}
            />

            {
                match capture.phase {
                    CapturePhase::Connecting => upload_status("Enviando arquivo...", "Aguarde enquanto enviamos seu arquivo."),
                    CapturePhase::Processing => upload_status("Processando fatura...", "Estamos extraindo as informações da sua fatura."),
                    _ => match &*selected {
                        Some((name, size)) => html! {
                            <div class="upload-file">
                                <span>{"📄 "}{name}</span>
                                <span class="muted">
                                    {format!("{:.2} MB", size / 1024.0 / 1024.0)}
                                </span>
                            </div>
                        },
                        None => html! {
                            <>
                                <span class="upload-icon">{"📤"}</span>
                                <h3>{"Arraste e solte arquivos aqui"}</h3>
                                <p class="muted">
                                    {"Suporta arquivos PDF, JPG e PNG. Tamanho máximo de 10MB."}
                                </p>
                                <button class="btn-primary" onclick={on_pick}>
                                    {"Selecionar Arquivo"}
                                </button>
                            </>
                        },
                    },
                }
            }
        </div>
    }
}

fn upload_status(title: &str, detail: &str) -> Html {
    html! {
        <div class="upload-status">
            <div class="spinner"></div>
            <h3>{title.to_string()}</h3>
            <p class="muted">{detail.to_string()}</p>
        </div>
    }
}
