use std::rc::Rc;
use yew::prelude::*;

use crate::models::invoice::{Invoice, mark_paid, remove_invoice};
use crate::models::mock::mock_invoices;

/// Handle returned by `use_invoices`: the working set plus its mutations.
///
/// The set is seeded from the mock dataset on every mount; nothing persists
/// across reloads.
#[derive(Clone, PartialEq)]
pub struct InvoicesHandle {
    pub invoices: Rc<Vec<Invoice>>,
    pub mark_paid: Callback<String>,
    pub delete: Callback<String>,
}

#[hook]
pub fn use_invoices() -> InvoicesHandle {
    let invoices = use_state(|| Rc::new(mock_invoices()));

    let on_mark_paid = {
        let invoices = invoices.clone();
        Callback::from(move |id: String| {
            invoices.set(Rc::new(mark_paid(&invoices, &id)));
        })
    };

    let on_delete = {
        let invoices = invoices.clone();
        Callback::from(move |id: String| {
            invoices.set(Rc::new(remove_invoice(&invoices, &id)));
        })
    };

    InvoicesHandle {
        invoices: (*invoices).clone(),
        mark_paid: on_mark_paid,
        delete: on_delete,
    }
}
