use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::file_upload::FileUpload;
use crate::components::gmail_import::GmailImport;
use crate::components::scanner_controller::ScannerController;
use crate::components::whatsapp_import::WhatsAppImport;
use crate::config::Config;
use crate::hooks::use_toast::use_toast;
use crate::models::invoice::{InvoiceDraft, PaymentMethod, next_invoice_id};
use crate::models::mock::mock_invoices;
use crate::services::capture::CaptureSource;

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryTab {
    Manual,
    Scan,
    Import,
    Upload,
}

impl EntryTab {
    fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Scan => "Escanear",
            Self::Import => "Importar",
            Self::Upload => "Upload",
        }
    }
}

const ENTRY_TABS: [EntryTab; 4] = [
    EntryTab::Manual,
    EntryTab::Scan,
    EntryTab::Import,
    EntryTab::Upload,
];

#[derive(Clone, Debug, Default, PartialEq)]
struct FormFields {
    creditor: String,
    description: String,
    amount: String,
    due_date: String,
    payment_method: PaymentMethod,
    code: String,
}

impl FormFields {
    fn from_draft(draft: &InvoiceDraft) -> Self {
        Self {
            creditor: draft.creditor.clone(),
            description: draft.description.clone(),
            amount: draft.amount.to_string(),
            due_date: draft.due_date.clone(),
            payment_method: draft.payment_method,
            code: draft
                .barcode
                .clone()
                .or_else(|| draft.pix_code.clone())
                .unwrap_or_default(),
        }
    }

    /// Builds a draft from the form, or `None` when a required field is
    /// missing or the amount does not parse.
    fn to_draft(&self) -> Option<InvoiceDraft> {
        let amount: f64 = self.amount.trim().replace(',', ".").parse().ok()?;
        let code = self.code.trim();

        let (barcode, pix_code) = match self.payment_method {
            PaymentMethod::Pix => (None, (!code.is_empty()).then(|| code.to_string())),
            _ => ((!code.is_empty()).then(|| code.to_string()), None),
        };

        let draft = InvoiceDraft {
            creditor: self.creditor.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
            due_date: self.due_date.trim().to_string(),
            payment_method: self.payment_method,
            barcode,
            pix_code,
        };
        draft.is_complete().then_some(draft)
    }
}

/// Add-invoice form with the four capture methods.
///
/// Scan, import and upload all funnel back into the manual fields. Saving is
/// simulated: the promoted record is logged and the user returns to the
/// dashboard with the working set untouched.
#[function_component(AddInvoiceForm)]
pub fn add_invoice_form() -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toast();
    let fields = use_state(FormFields::default);
    let entry_tab = use_state(|| EntryTab::Manual);
    let scan_source = use_state(|| CaptureSource::Barcode);

    let fill_from_draft = {
        let fields = fields.clone();
        let entry_tab = entry_tab.clone();
        let toasts = toasts.clone();
        Callback::from(move |draft: InvoiceDraft| {
            fields.set(FormFields::from_draft(&draft));
            entry_tab.set(EntryTab::Manual);
            toasts.info(
                "Dados capturados",
                "Os dados da fatura foram preenchidos automaticamente.",
            );
        })
    };

    let on_import_complete = {
        let fill = fill_from_draft.clone();
        Callback::from(move |drafts: Vec<InvoiceDraft>| {
            if let Some(first) = drafts.into_iter().next() {
                fill.emit(first);
            }
        })
    };

    let on_save = {
        let fields = fields.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(draft) = fields.to_draft() else {
                toasts.error(
                    "Dados incompletos",
                    "Por favor, preencha os campos obrigatórios: Credor, Valor e Data de Vencimento.",
                );
                return;
            };

            // Simulated save: promote the draft and log it; nothing persists.
            let invoice = draft.into_invoice(next_invoice_id(&mock_invoices()));
            match serde_json::to_string(&invoice) {
                Ok(json) => web_sys::console::log_1(&format!("fatura salva: {json}").into()),
                Err(e) => web_sys::console::warn_1(&format!("serialização falhou: {e}").into()),
            }

            toasts.success("Fatura salva", "A fatura foi salva com sucesso.");

            let navigator = navigator.clone();
            spawn_local(async move {
                TimeoutFuture::new(Config::SAVE_REDIRECT_MS).await;
                navigator.push(&Route::Dashboard);
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Dashboard))
    };

    let set_field = |update: fn(&mut FormFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            update(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_description_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.description = area.value();
            fields.set(next);
        })
    };

    let on_method_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.payment_method = select.value().parse().unwrap_or_default();
            fields.set(next);
        })
    };

    html! {
        <div class="add-invoice-form">
            <div class="form-header">
                <h2>{"Detalhes da Fatura"}</h2>
                <p class="muted">
                    {"Preencha as informações da fatura ou utilize um dos métodos de captura automática."}
                </p>
            </div>

            <div class="panel-tabs" role="tablist">
                {
                    ENTRY_TABS.iter().map(|t| {
                        let t = *t;
                        let entry_tab = entry_tab.clone();
                        let class = if *entry_tab == t { "tab active" } else { "tab" };
                        let onclick = Callback::from(move |_| entry_tab.set(t));
                        html! { <button {class} role="tab" {onclick}>{t.label()}</button> }
                    }).collect::<Html>()
                }
            </div>

            {
                match *entry_tab {
                    EntryTab::Manual => html! {
                        <div class="form-grid">
                            <label>
                                {"Credor"}
                                <input
                                    type="text"
                                    placeholder="Nome do credor"
                                    value={fields.creditor.clone()}
                                    oninput={set_field(|f, v| f.creditor = v)}
                                />
                            </label>

                            <label>
                                {"Valor"}
                                <input
                                    type="number"
                                    step="0.01"
                                    placeholder="R$ 0,00"
                                    value={fields.amount.clone()}
                                    oninput={set_field(|f, v| f.amount = v)}
                                />
                            </label>

                            <label>
                                {"Data de Vencimento"}
                                <input
                                    type="text"
                                    placeholder="DD/MM/AAAA"
                                    value={fields.due_date.clone()}
                                    oninput={set_field(|f, v| f.due_date = v)}
                                />
                            </label>

                            <label>
                                {"Método de Pagamento"}
                                <select onchange={on_method_change}>
                                    {
                                        PaymentMethod::all().iter().map(|m| {
                                            html! {
                                                <option
                                                    value={method_value(*m)}
                                                    selected={fields.payment_method == *m}
                                                >
                                                    {m.label()}
                                                </option>
                                            }
                                        }).collect::<Html>()
                                    }
                                </select>
                            </label>

                            <label class="span-2">
                                {"Descrição"}
                                <textarea
                                    placeholder="Descrição da fatura"
                                    value={fields.description.clone()}
                                    oninput={on_description_input}
                                />
                            </label>

                            <label class="span-2">
                                {"Código de Barras / PIX (opcional)"}
                                <input
                                    type="text"
                                    placeholder="Insira o código"
                                    value={fields.code.clone()}
                                    oninput={set_field(|f, v| f.code = v)}
                                />
                            </label>
                        </div>
                    },
                    EntryTab::Scan => {
                        let scan = *scan_source;
                        html! {
                            <div class="scan-tab">
                                <div class="panel-tabs" role="tablist">
                                    {
                                        [CaptureSource::Barcode, CaptureSource::QrCode].iter().map(|s| {
                                            let s = *s;
                                            let scan_source = scan_source.clone();
                                            let class = if scan == s { "tab active" } else { "tab" };
                                            let onclick = Callback::from(move |_| scan_source.set(s));
                                            html! { <button {class} role="tab" {onclick}>{s.label()}</button> }
                                        }).collect::<Html>()
                                    }
                                </div>
                                <ScannerController
                                    key={if scan == CaptureSource::Barcode { "barcode" } else { "qrcode" }}
                                    source={scan}
                                    on_scan_complete={fill_from_draft.clone()}
                                />
                            </div>
                        }
                    },
                    EntryTab::Import => html! {
                        <div class="import-tab">
                            <WhatsAppImport on_import_complete={on_import_complete.clone()} />
                            <GmailImport on_import_complete={on_import_complete.clone()} />
                        </div>
                    },
                    EntryTab::Upload => html! {
                        <FileUpload on_upload_complete={fill_from_draft.clone()} />
                    },
                }
            }

            <div class="form-footer">
                <button class="btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
                <button class="btn-primary" onclick={on_save}>{"Salvar Fatura"}</button>
            </div>
        </div>
    }
}

fn method_value(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Boleto => "boleto",
        PaymentMethod::Pix => "pix",
        PaymentMethod::CreditCard => "credit_card",
        PaymentMethod::Other => "other",
    }
}
