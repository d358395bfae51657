//! Simulated capture flows.
//!
//! No capture source performs real I/O: every flow is a fixed sequence of
//! timed phases that ends by handing a canned invoice draft to the caller.
//! The phases live in one explicit state machine so a real decoder or client
//! can later replace the timers without changing the calling contract.

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::invoice::{InvoiceDraft, PaymentMethod};
use crate::models::mock::{BOLETO_BARCODE, CONDO_PIX, GYM_PIX};

/// Where an invoice draft is being captured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureSource {
    Barcode,
    QrCode,
    Upload,
    Gmail,
    WhatsApp,
}

impl CaptureSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Barcode => "Código de Barras",
            Self::QrCode => "QR Code PIX",
            Self::Upload => "Upload de Arquivo",
            Self::Gmail => "Gmail",
            Self::WhatsApp => "WhatsApp",
        }
    }

    /// Camera-backed sources scan; the others connect to a (fake) account or
    /// upload target first.
    fn scans(self) -> bool {
        matches!(self, Self::Barcode | Self::QrCode)
    }

    /// The canned drafts this source "detects" on completion.
    pub fn results(self) -> Vec<InvoiceDraft> {
        match self {
            Self::Barcode => vec![draft(
                "Enel Energia",
                "Conta de energia - Junho/2023",
                195.67,
                "15/06/2023",
                PaymentMethod::Boleto,
                Some(BOLETO_BARCODE),
                None,
            )],
            Self::QrCode => vec![draft(
                "Condomínio Edifício Aurora",
                "Taxa condominial - Junho/2023",
                450.0,
                "10/06/2023",
                PaymentMethod::Pix,
                None,
                Some(CONDO_PIX),
            )],
            Self::Upload => vec![draft(
                "Sabesp",
                "Conta de água - Junho/2023",
                105.32,
                "20/06/2023",
                PaymentMethod::Boleto,
                Some(BOLETO_BARCODE),
                None,
            )],
            Self::Gmail => vec![
                draft(
                    "Cartão Nubank",
                    "Fatura - Junho/2023",
                    2345.67,
                    "10/06/2023",
                    PaymentMethod::CreditCard,
                    None,
                    None,
                ),
                draft(
                    "Plano de Saúde Vida",
                    "Plano familiar - Junho/2023",
                    789.9,
                    "20/06/2023",
                    PaymentMethod::Boleto,
                    Some(BOLETO_BARCODE),
                    None,
                ),
                draft(
                    "IPTU 2023",
                    "Parcela 6/10",
                    213.45,
                    "15/06/2023",
                    PaymentMethod::Boleto,
                    Some(BOLETO_BARCODE),
                    None,
                ),
                draft(
                    "Seguro Auto",
                    "Parcela 4/12 - Honda Civic",
                    189.9,
                    "25/06/2023",
                    PaymentMethod::Boleto,
                    Some(BOLETO_BARCODE),
                    None,
                ),
            ],
            Self::WhatsApp => vec![
                draft(
                    "Claro",
                    "Internet Fibra 300MB - Junho/2023",
                    119.9,
                    "10/06/2023",
                    PaymentMethod::Boleto,
                    Some(BOLETO_BARCODE),
                    None,
                ),
                draft(
                    "Escola Criativa",
                    "Mensalidade escolar - Junho/2023",
                    1250.0,
                    "15/06/2023",
                    PaymentMethod::Boleto,
                    Some(BOLETO_BARCODE),
                    None,
                ),
                draft(
                    "Academia Corpo em Forma",
                    "Mensalidade - Junho/2023",
                    99.9,
                    "10/06/2023",
                    PaymentMethod::Pix,
                    None,
                    Some(GYM_PIX),
                ),
            ],
        }
    }
}

/// Phase of a simulated capture run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapturePhase {
    #[default]
    Idle,
    Connecting,
    Scanning,
    Processing,
    Complete,
}

impl CapturePhase {
    /// The single transition function for every capture flow.
    pub fn advance(self, source: CaptureSource) -> Self {
        match self {
            Self::Idle => {
                if source.scans() {
                    Self::Scanning
                } else {
                    Self::Connecting
                }
            }
            Self::Connecting | Self::Scanning => Self::Processing,
            Self::Processing | Self::Complete => Self::Complete,
        }
    }

    /// How long the flow stays in this phase before advancing.
    ///
    /// `None` means the phase does not advance by itself.
    pub fn delay_ms(self, source: CaptureSource) -> Option<u32> {
        match (self, source) {
            (Self::Scanning, _) => Some(Config::SCAN_MS),
            (Self::Connecting, CaptureSource::Upload) => Some(Config::UPLOAD_MS),
            (Self::Connecting, _) => Some(Config::CONNECT_MS),
            (Self::Processing, CaptureSource::Upload) => Some(Config::FILE_PROCESS_MS),
            (Self::Processing, _) => Some(Config::PROCESS_MS),
            (Self::Idle | Self::Complete, _) => None,
        }
    }

    /// True while the run is in flight and inputs should be disabled.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Connecting | Self::Scanning | Self::Processing)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Aguardando",
            Self::Connecting => "Conectando...",
            Self::Scanning => "Escaneando...",
            Self::Processing => "Processando...",
            Self::Complete => "Concluído",
        }
    }
}

/// Validates a selected file against the accepted types and size cap.
///
/// Content is never inspected; a canned record is returned either way once
/// the simulated processing finishes.
pub fn validate_upload(mime_type: &str, size_bytes: f64) -> Result<(), AppError> {
    const ACCEPTED: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

    if !ACCEPTED.contains(&mime_type) {
        return Err(AppError::InvalidFile(
            "envie apenas arquivos PDF, JPG ou PNG".to_string(),
        ));
    }
    if size_bytes > Config::MAX_UPLOAD_BYTES {
        return Err(AppError::InvalidFile(
            "o tamanho máximo permitido é 10MB".to_string(),
        ));
    }
    Ok(())
}

fn draft(
    creditor: &str,
    description: &str,
    amount: f64,
    due_date: &str,
    payment_method: PaymentMethod,
    barcode: Option<&str>,
    pix_code: Option<&str>,
) -> InvoiceDraft {
    InvoiceDraft {
        creditor: creditor.to_string(),
        description: description.to_string(),
        amount,
        due_date: due_date.to_string(),
        payment_method,
        barcode: barcode.map(str::to_string),
        pix_code: pix_code.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(source: CaptureSource) -> Vec<CapturePhase> {
        let mut phases = vec![CapturePhase::Idle];
        let mut phase = CapturePhase::Idle;
        loop {
            phase = phase.advance(source);
            phases.push(phase);
            if phase == CapturePhase::Complete {
                return phases;
            }
        }
    }

    #[test]
    fn test_scanner_phase_sequence() {
        for source in [CaptureSource::Barcode, CaptureSource::QrCode] {
            assert_eq!(
                run_to_completion(source),
                vec![
                    CapturePhase::Idle,
                    CapturePhase::Scanning,
                    CapturePhase::Processing,
                    CapturePhase::Complete,
                ]
            );
        }
    }

    #[test]
    fn test_connecting_phase_sequence() {
        for source in [
            CaptureSource::Upload,
            CaptureSource::Gmail,
            CaptureSource::WhatsApp,
        ] {
            assert_eq!(
                run_to_completion(source),
                vec![
                    CapturePhase::Idle,
                    CapturePhase::Connecting,
                    CapturePhase::Processing,
                    CapturePhase::Complete,
                ]
            );
        }
    }

    #[test]
    fn test_terminal_phases_do_not_self_advance() {
        assert_eq!(CapturePhase::Idle.delay_ms(CaptureSource::Gmail), None);
        assert_eq!(CapturePhase::Complete.delay_ms(CaptureSource::Barcode), None);
        assert!(CapturePhase::Scanning.delay_ms(CaptureSource::Barcode).is_some());
    }

    #[test]
    fn test_payload_counts() {
        assert_eq!(CaptureSource::Barcode.results().len(), 1);
        assert_eq!(CaptureSource::QrCode.results().len(), 1);
        assert_eq!(CaptureSource::Upload.results().len(), 1);
        assert_eq!(CaptureSource::Gmail.results().len(), 4);
        assert_eq!(CaptureSource::WhatsApp.results().len(), 3);
    }

    #[test]
    fn test_qr_payload_carries_pix_code() {
        let results = CaptureSource::QrCode.results();
        assert_eq!(results[0].payment_method, PaymentMethod::Pix);
        assert!(results[0].pix_code.is_some());
        assert!(results[0].barcode.is_none());
    }

    #[test]
    fn test_upload_validation() {
        assert!(validate_upload("application/pdf", 1024.0).is_ok());
        assert!(validate_upload("image/png", 1024.0).is_ok());
        assert!(validate_upload("text/plain", 1024.0).is_err());
        assert!(validate_upload("image/jpeg", 11.0 * 1024.0 * 1024.0).is_err());
    }
}
