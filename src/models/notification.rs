/// Severity of a canned notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notification-info",
            Self::Warning => "notification-warning",
            Self::Success => "notification-success",
            Self::Error => "notification-error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "🔔",
            Self::Warning => "⏰",
            Self::Success => "✅",
            Self::Error => "⚠️",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub date: String,
    pub read: bool,
}

fn notification(
    id: &str,
    title: &str,
    message: &str,
    kind: NotificationKind,
    date: &str,
    read: bool,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        date: date.to_string(),
        read,
    }
}

/// The canned notification feed; mutations are session-local only.
pub fn mock_notifications() -> Vec<Notification> {
    use NotificationKind::{Error, Info, Success, Warning};

    vec![
        notification(
            "1",
            "Fatura próxima do vencimento",
            "A fatura da Claro vence em 2 dias. Valor: R$ 119,90.",
            Warning,
            "Hoje, 10:30",
            false,
        ),
        notification(
            "2",
            "Fatura vencida",
            "A fatura do Condomínio Edifício Aurora está vencida há 2 dias.",
            Error,
            "Ontem, 15:45",
            false,
        ),
        notification(
            "3",
            "Fatura paga com sucesso",
            "Sua fatura da Sabesp foi paga com sucesso.",
            Success,
            "Ontem, 09:15",
            true,
        ),
        notification(
            "4",
            "Nova fatura disponível",
            "Uma nova fatura da Escola Criativa foi adicionada.",
            Info,
            "12/06/2023, 14:20",
            true,
        ),
        notification(
            "5",
            "Fatura próxima do vencimento",
            "A fatura da Academia Corpo em Forma vence em 3 dias.",
            Warning,
            "10/06/2023, 08:00",
            true,
        ),
    ]
}

/// Marks the matching notification as read; unknown ids are a no-op.
pub fn mark_read(notifications: &mut [Notification], id: &str) {
    if let Some(n) = notifications.iter_mut().find(|n| n.id == id) {
        n.read = true;
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_read_touches_one() {
        let mut feed = mock_notifications();
        assert_eq!(unread_count(&feed), 2);

        mark_read(&mut feed, "1");
        assert_eq!(unread_count(&feed), 1);

        // Unknown id leaves the feed untouched.
        mark_read(&mut feed, "zzz");
        assert_eq!(unread_count(&feed), 1);
    }
}
