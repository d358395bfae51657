#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fatura_dashboard::models::filter::{
        DatePreset, FilterCriteria, StatusTab, filter_invoices,
    };
    use fatura_dashboard::models::invoice::{
        Invoice, InvoiceDraft, InvoiceStatus, PaymentMethod, mark_paid, next_invoice_id,
        remove_invoice,
    };
    use fatura_dashboard::models::mock::mock_invoices;
    use fatura_dashboard::models::stats::{DashboardStats, average_amount, monthly_totals};
    use fatura_dashboard::services::capture::{CapturePhase, CaptureSource};
    use fatura_dashboard::utils::format::format_currency;

    fn ids(invoices: &[Invoice]) -> Vec<&str> {
        invoices.iter().map(|inv| inv.id.as_str()).collect()
    }

    // Helper: an invoice that only differs from the mock set where the test
    // needs it to.
    fn boundary_invoice(id: &str, amount: f64) -> Invoice {
        InvoiceDraft {
            creditor: "Credor Limite".to_string(),
            description: "Teste de limite".to_string(),
            amount,
            due_date: "01/07/2023".to_string(),
            payment_method: PaymentMethod::Boleto,
            barcode: None,
            pix_code: None,
        }
        .into_invoice(id.to_string())
    }

    // ===== Filtering Tests =====

    #[test]
    fn test_pending_tab_matches_expected_ids() {
        let invoices = mock_invoices();
        let filtered = filter_invoices(
            &invoices,
            StatusTab::Pending,
            "",
            &FilterCriteria::default(),
        );

        assert_eq!(ids(&filtered), vec!["inv-003", "inv-005", "inv-006", "inv-007"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let invoices = mock_invoices();
        let filtered = filter_invoices(
            &invoices,
            StatusTab::All,
            "SaBeSp",
            &FilterCriteria::default(),
        );

        assert_eq!(ids(&filtered), vec!["inv-002"]);
    }

    #[test]
    fn test_search_also_covers_description() {
        let invoices = mock_invoices();
        let filtered = filter_invoices(
            &invoices,
            StatusTab::All,
            "honda",
            &FilterCriteria::default(),
        );

        assert_eq!(ids(&filtered), vec!["inv-010"]);
    }

    #[test]
    fn test_min_amount_boundary_is_inclusive() {
        let mut invoices = mock_invoices();
        invoices.push(boundary_invoice("inv-011", 500.0));

        let criteria = FilterCriteria {
            min_amount: Some(500.0),
            ..FilterCriteria::default()
        };
        let filtered = filter_invoices(&invoices, StatusTab::All, "", &criteria);

        // inv-004 at 450.00 is out; 1250.00, 2456.78 and exactly 500.00 are in.
        assert_eq!(ids(&filtered), vec!["inv-005", "inv-008", "inv-011"]);
    }

    #[test]
    fn test_max_amount_and_due_date() {
        let invoices = mock_invoices();
        let criteria = FilterCriteria {
            max_amount: Some(150.0),
            due_date: Some("10/06/2023".to_string()),
            ..FilterCriteria::default()
        };
        let filtered = filter_invoices(&invoices, StatusTab::All, "", &criteria);

        assert_eq!(ids(&filtered), vec!["inv-003", "inv-007"]);
    }

    #[test]
    fn test_filtered_set_is_consistent_subset() {
        let invoices = mock_invoices();
        let criteria = FilterCriteria {
            creditor: "a".to_string(),
            min_amount: Some(100.0),
            max_amount: Some(1500.0),
            status: Some(InvoiceStatus::Pending),
            ..FilterCriteria::default()
        };

        let filtered = filter_invoices(&invoices, StatusTab::All, "2023", &criteria);

        assert!(!filtered.is_empty());
        for inv in &filtered {
            assert!(invoices.contains(inv));
            assert!(inv.matches_query("2023"));
            assert!(inv.creditor.to_lowercase().contains('a'));
            assert!(inv.amount >= 100.0 && inv.amount <= 1500.0);
            assert_eq!(inv.status, InvoiceStatus::Pending);
        }
    }

    #[test]
    fn test_status_criteria_ignored_when_equal_to_tab() {
        let invoices = mock_invoices();
        let criteria = FilterCriteria {
            status: Some(InvoiceStatus::Overdue),
            ..FilterCriteria::default()
        };

        let same = filter_invoices(&invoices, StatusTab::Overdue, "", &criteria);
        let tab_only =
            filter_invoices(&invoices, StatusTab::Overdue, "", &FilterCriteria::default());
        assert_eq!(same, tab_only);

        // On a different tab the criteria status still applies and empties
        // the result (nothing is both pending and overdue).
        let crossed = filter_invoices(&invoices, StatusTab::Pending, "", &criteria);
        assert!(crossed.is_empty());
    }

    // ===== Mutation Tests =====

    #[test]
    fn test_mark_paid_touches_only_the_matching_invoice() {
        let invoices = mock_invoices();
        let updated = mark_paid(&invoices, "inv-003");

        assert_eq!(updated.len(), invoices.len());
        for (before, after) in invoices.iter().zip(&updated) {
            if before.id == "inv-003" {
                assert_eq!(after.status, InvoiceStatus::Paid);
                // Every other field is unchanged.
                let mut reverted = after.clone();
                reverted.status = before.status;
                assert_eq!(&reverted, before);
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_remove_deletes_exactly_one() {
        let invoices = mock_invoices();
        let updated = remove_invoice(&invoices, "inv-007");

        assert_eq!(updated.len(), invoices.len() - 1);
        assert!(!updated.iter().any(|inv| inv.id == "inv-007"));

        // Removing an id that is no longer there is a no-op.
        let again = remove_invoice(&updated, "inv-007");
        assert_eq!(again, updated);
    }

    #[test]
    fn test_draft_promotion_assigns_sequential_id() {
        let invoices = mock_invoices();
        let id = next_invoice_id(&invoices);
        assert_eq!(id, "inv-011");

        let draft = InvoiceDraft {
            creditor: "Enel Energia".to_string(),
            description: "Conta de energia - Julho/2023".to_string(),
            amount: 201.15,
            due_date: "15/07/2023".to_string(),
            payment_method: PaymentMethod::Boleto,
            barcode: None,
            pix_code: None,
        };
        assert!(draft.is_complete());

        let invoice = draft.into_invoice(id);
        assert_eq!(invoice.id, "inv-011");
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    // ===== Serialization Tests =====

    #[test]
    fn test_invoice_wire_shape() {
        // Field names mirror the dataset the dashboard was seeded from.
        let json = r#"{
            "id": "inv-004",
            "creditor": "Condomínio Edifício Aurora",
            "description": "Taxa condominial - Junho/2023",
            "amount": 450.0,
            "dueDate": "05/06/2023",
            "status": "overdue",
            "paymentMethod": "pix",
            "pixCode": "00020126pix",
            "createdAt": "01/06/2023"
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Overdue);
        assert_eq!(invoice.payment_method, PaymentMethod::Pix);
        assert_eq!(invoice.due_date, "05/06/2023");
        assert!(invoice.barcode.is_none());

        let back = serde_json::to_string(&invoice).unwrap();
        assert!(back.contains("\"dueDate\""));
        assert!(!back.contains("\"payment_method\""));
        assert!(back.contains("\"paymentMethod\":\"pix\""));
    }

    // ===== Stats Tests =====

    #[test]
    fn test_dashboard_stats_with_injected_today() {
        let invoices = mock_invoices();
        let today = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        let stats = DashboardStats::compute(&invoices, today);

        assert_eq!(stats.due_today, 2); // inv-003 and inv-007
        assert!((stats.paid - (187.45 + 98.32 + 2456.78 + 213.45)).abs() < 1e-9);
        assert!((average_amount(&invoices) - stats.total / 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_series_lengths_match() {
        let (labels, values) = monthly_totals(&mock_invoices());
        assert_eq!(labels.len(), values.len());
        assert_eq!(labels, vec!["05/2023", "06/2023"]);
    }

    // ===== Query Parameter Presets =====

    #[test]
    fn test_date_presets_resolve_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        assert_eq!(DatePreset::Today.due_date(today), "30/06/2023");
        // Upcoming crosses the month boundary.
        assert_eq!(DatePreset::Upcoming.due_date(today), "03/07/2023");

        assert_eq!("today".parse::<DatePreset>(), Ok(DatePreset::Today));
        assert_eq!("UPCOMING".parse::<DatePreset>(), Ok(DatePreset::Upcoming));
        assert!("yesterday".parse::<DatePreset>().is_err());
    }

    #[test]
    fn test_tab_query_values() {
        assert_eq!("all".parse::<StatusTab>(), Ok(StatusTab::All));
        assert_eq!("pending".parse::<StatusTab>(), Ok(StatusTab::Pending));
        assert_eq!("paid".parse::<StatusTab>(), Ok(StatusTab::Paid));
        assert_eq!("overdue".parse::<StatusTab>(), Ok(StatusTab::Overdue));
    }

    // ===== Capture Flow Tests =====

    #[test]
    fn test_every_source_reaches_complete_in_three_steps() {
        for source in [
            CaptureSource::Barcode,
            CaptureSource::QrCode,
            CaptureSource::Upload,
            CaptureSource::Gmail,
            CaptureSource::WhatsApp,
        ] {
            let mut phase = CapturePhase::Idle;
            let mut steps = 0;
            while phase != CapturePhase::Complete {
                phase = phase.advance(source);
                steps += 1;
                assert!(steps <= 3, "{source:?} did not terminate");
            }
            assert_eq!(steps, 3);
        }
    }

    #[test]
    fn test_import_sources_return_batches() {
        assert_eq!(CaptureSource::Gmail.results().len(), 4);
        assert_eq!(CaptureSource::WhatsApp.results().len(), 3);

        // Every canned draft is ready to promote.
        for draft in CaptureSource::Gmail
            .results()
            .into_iter()
            .chain(CaptureSource::WhatsApp.results())
        {
            assert!(draft.is_complete());
        }
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_currency_matches_dataset_rendering() {
        assert_eq!(format_currency(2456.78), "R$ 2.456,78");
        assert_eq!(format_currency(99.9), "R$ 99,90");
    }
}
