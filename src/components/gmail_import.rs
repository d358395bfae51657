use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::import_list::ImportList;
use crate::hooks::use_capture::use_capture;
use crate::hooks::use_toast::use_toast;
use crate::models::invoice::InvoiceDraft;
use crate::services::capture::{CapturePhase, CaptureSource};
use crate::utils::format::is_valid_email;

#[derive(Properties, PartialEq)]
pub struct GmailImportProps {
    pub on_import_complete: Callback<Vec<InvoiceDraft>>,
}

/// Simulated Gmail import: validate the address, "connect", then offer the
/// canned batch of found invoices for selection.
#[function_component(GmailImport)]
pub fn gmail_import(props: &GmailImportProps) -> Html {
    let email = use_state(String::new);
    let found = use_state(|| Option::<Vec<InvoiceDraft>>::None);
    let toasts = use_toast();

    let on_complete = {
        let found = found.clone();
        let toasts = toasts.clone();
        Callback::from(move |drafts: Vec<InvoiceDraft>| {
            toasts.success(
                "Gmail conectado",
                &format!("{} faturas encontradas nos seus emails.", drafts.len()),
            );
            found.set(Some(drafts));
        })
    };

    let capture = use_capture(CaptureSource::Gmail, on_complete);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_connect = {
        let email = email.clone();
        let start = capture.start.clone();
        let toasts = toasts.clone();
        Callback::from(move |_| {
            if !is_valid_email(email.trim()) {
                toasts.error(
                    "E-mail inválido",
                    "Informe um endereço de e-mail válido para conectar.",
                );
                return;
            }
            start.emit(());
        })
    };

    let on_import = {
        let found = found.clone();
        let email = email.clone();
        let on_import_complete = props.on_import_complete.clone();
        let toasts = toasts.clone();
        Callback::from(move |picked: Vec<InvoiceDraft>| {
            toasts.success(
                "Importação concluída",
                &format!("{} faturas importadas com sucesso.", picked.len()),
            );
            on_import_complete.emit(picked);
            found.set(None);
            email.set(String::new());
        })
    };

    if let Some(drafts) = &*found {
        return html! {
            <ImportList
                title="Faturas encontradas no Gmail"
                drafts={drafts.clone()}
                {on_import}
            />
        };
    }

    html! {
        <div class="import-connect">
            <span class="import-icon">{"✉️"}</span>
            <h3>{"Importar do Gmail"}</h3>
            <p class="muted">
                {"Conecte sua conta do Gmail para importar faturas recebidas por email."}
            </p>
            <input
                type="email"
                placeholder="seu-email@gmail.com"
                value={(*email).clone()}
                oninput={on_email_input}
                disabled={capture.phase.is_busy()}
            />
            {
                match capture.phase {
                    CapturePhase::Connecting => html! {
                        <button class="btn-primary" disabled=true>{"Conectando..."}</button>
                    },
                    CapturePhase::Processing => html! {
                        <button class="btn-primary" disabled=true>{"Carregando faturas..."}</button>
                    },
                    _ => html! {
                        <button class="btn-primary" onclick={on_connect}>{"Conectar Gmail"}</button>
                    },
                }
            }
        </div>
    }
}
