use yew::prelude::*;

use crate::components::import_list::ImportList;
use crate::hooks::use_capture::use_capture;
use crate::hooks::use_toast::use_toast;
use crate::models::invoice::InvoiceDraft;
use crate::services::capture::{CapturePhase, CaptureSource};

#[derive(Properties, PartialEq)]
pub struct WhatsAppImportProps {
    pub on_import_complete: Callback<Vec<InvoiceDraft>>,
}

/// Simulated WhatsApp import: "connect", then offer the canned batch of
/// invoices found in conversations.
#[function_component(WhatsAppImport)]
pub fn whatsapp_import(props: &WhatsAppImportProps) -> Html {
    let found = use_state(|| Option::<Vec<InvoiceDraft>>::None);
    let toasts = use_toast();

    let on_complete = {
        let found = found.clone();
        let toasts = toasts.clone();
        Callback::from(move |drafts: Vec<InvoiceDraft>| {
            toasts.success(
                "WhatsApp conectado",
                &format!("{} faturas encontradas nas suas conversas.", drafts.len()),
            );
            found.set(Some(drafts));
        })
    };

    let capture = use_capture(CaptureSource::WhatsApp, on_complete);

    let on_connect = {
        let start = capture.start.clone();
        Callback::from(move |_| start.emit(()))
    };

    let on_import = {
        let found = found.clone();
        let on_import_complete = props.on_import_complete.clone();
        let toasts = toasts.clone();
        Callback::from(move |picked: Vec<InvoiceDraft>| {
            toasts.success(
                "Importação concluída",
                &format!("{} faturas importadas com sucesso.", picked.len()),
            );
            on_import_complete.emit(picked);
            found.set(None);
        })
    };

    if let Some(drafts) = &*found {
        return html! {
            <ImportList
                title="Faturas encontradas no WhatsApp"
                drafts={drafts.clone()}
                {on_import}
            />
        };
    }

    html! {
        <div class="import-connect">
            <span class="import-icon">{"💬"}</span>
            <h3>{"Importar do WhatsApp"}</h3>
            <p class="muted">
                {"Conecte sua conta do WhatsApp para importar faturas recebidas por mensagem."}
            </p>
            {
                match capture.phase {
                    CapturePhase::Connecting => html! {
                        <button class="btn-primary" disabled=true>{"Conectando..."}</button>
                    },
                    CapturePhase::Processing => html! {
                        <button class="btn-primary" disabled=true>{"Carregando faturas..."}</button>
                    },
                    _ => html! {
                        <button class="btn-primary" onclick={on_connect}>{"Conectar WhatsApp"}</button>
                    },
                }
            }
        </div>
    }
}
