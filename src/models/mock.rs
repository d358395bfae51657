use super::invoice::{Invoice, InvoiceStatus, PaymentMethod};

pub const BOLETO_BARCODE: &str = "34191790010104351004791020150008291070026000";

pub const CONDO_PIX: &str = "00020126580014br.gov.bcb.pix0136a629532e-7693-4846-b028-f142a1dd1d55520400005303986540510.005802BR5913Condominio6008Sao Paulo62070503***6304E2CA";
pub const GYM_PIX: &str = "00020126580014br.gov.bcb.pix0136a629532e-7693-4846-b028-f142a1dd1d55520400005303986540510.005802BR5913Academia6008Sao Paulo62070503***6304D32A";

fn invoice(
    id: &str,
    creditor: &str,
    description: &str,
    amount: f64,
    due_date: &str,
    status: InvoiceStatus,
    payment_method: PaymentMethod,
    barcode: Option<&str>,
    pix_code: Option<&str>,
    created_at: &str,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        creditor: creditor.to_string(),
        description: description.to_string(),
        amount,
        due_date: due_date.to_string(),
        status,
        payment_method,
        barcode: barcode.map(str::to_string),
        pix_code: pix_code.map(str::to_string),
        created_at: created_at.to_string(),
    }
}

/// The in-memory dataset every session starts from.
///
/// There is no backend behind this: mutations live in component state and are
/// gone on reload.
pub fn mock_invoices() -> Vec<Invoice> {
    use InvoiceStatus::{Overdue, Paid, Pending};
    use PaymentMethod::{Boleto, CreditCard, Pix};

    vec![
        invoice(
            "inv-001",
            "Enel Energia",
            "Conta de energia - Maio/2023",
            187.45,
            "15/05/2023",
            Paid,
            Boleto,
            Some(BOLETO_BARCODE),
            None,
            "01/05/2023",
        ),
        invoice(
            "inv-002",
            "Sabesp",
            "Conta de água - Maio/2023",
            98.32,
            "20/05/2023",
            Paid,
            Boleto,
            Some(BOLETO_BARCODE),
            None,
            "05/05/2023",
        ),
        invoice(
            "inv-003",
            "Claro",
            "Internet Fibra 300MB - Junho/2023",
            119.9,
            "10/06/2023",
            Pending,
            Boleto,
            Some(BOLETO_BARCODE),
            None,
            "01/06/2023",
        ),
        invoice(
            "inv-004",
            "Condomínio Edifício Aurora",
            "Taxa condominial - Junho/2023",
            450.0,
            "05/06/2023",
            Overdue,
            Pix,
            None,
            Some(CONDO_PIX),
            "01/06/2023",
        ),
        invoice(
            "inv-005",
            "Escola Criativa",
            "Mensalidade escolar - Junho/2023",
            1250.0,
            "15/06/2023",
            Pending,
            Boleto,
            Some(BOLETO_BARCODE),
            None,
            "01/06/2023",
        ),
        invoice(
            "inv-006",
            "Plano de Saúde Vida",
            "Plano familiar - Junho/2023",
            789.9,
            "20/06/2023",
            Pending,
            CreditCard,
            None,
            None,
            "01/06/2023",
        ),
        invoice(
            "inv-007",
            "Academia Corpo em Forma",
            "Mensalidade - Junho/2023",
            99.9,
            "10/06/2023",
            Pending,
            Pix,
            None,
            Some(GYM_PIX),
            "01/06/2023",
        ),
        invoice(
            "inv-008",
            "Cartão Nubank",
            "Fatura - Maio/2023",
            2456.78,
            "10/05/2023",
            Paid,
            CreditCard,
            None,
            None,
            "01/05/2023",
        ),
        invoice(
            "inv-009",
            "IPTU 2023",
            "Parcela 5/10",
            213.45,
            "15/05/2023",
            Paid,
            Boleto,
            Some(BOLETO_BARCODE),
            None,
            "01/05/2023",
        ),
        invoice(
            "inv-010",
            "Seguro Auto",
            "Parcela 3/12 - Honda Civic",
            189.9,
            "25/05/2023",
            Overdue,
            Boleto,
            Some(BOLETO_BARCODE),
            None,
            "01/05/2023",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let invoices = mock_invoices();
        assert_eq!(invoices.len(), 10);

        // Ids are unique within the set.
        let mut ids: Vec<_> = invoices.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);

        // Amounts are non-negative.
        assert!(invoices.iter().all(|i| i.amount >= 0.0));
    }
}
