use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::BottomNavigation;
use crate::components::add_invoice_form::AddInvoiceForm;

#[function_component(AddInvoicePage)]
pub fn add_invoice_page() -> Html {
    html! {
        <div class="page">
            <header class="app-header">
                <div class="header-row">
                    <Link<Route> to={Route::Dashboard} classes="back-link">
                        {"‹ Voltar"}
                    </Link<Route>>
                    <h1>{"Adicionar Nova Fatura"}</h1>
                </div>
            </header>

            <main class="page-body">
                <AddInvoiceForm />
            </main>

            <BottomNavigation />
        </div>
    }
}
