use std::rc::Rc;
use yew::prelude::*;

/// Severity of a transient toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
}

pub enum ToastAction {
    Push {
        title: String,
        message: String,
        kind: ToastKind,
    },
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Push {
                title,
                message,
                kind,
            } => {
                state.toasts.push(Toast {
                    id: state.next_id,
                    title,
                    message,
                    kind,
                });
                state.next_id += 1;
            }
            ToastAction::Dismiss(id) => state.toasts.retain(|t| t.id != id),
        }
        Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Handle for pushing and dismissing toasts from any component.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    ctx: ToastContext,
}

impl ToastHandle {
    pub fn toasts(&self) -> Vec<Toast> {
        self.ctx.toasts.clone()
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(title, message, ToastKind::Info);
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(title, message, ToastKind::Success);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(title, message, ToastKind::Error);
    }

    pub fn dismiss(&self, id: u32) {
        self.ctx.dispatch(ToastAction::Dismiss(id));
    }

    fn push(&self, title: &str, message: &str, kind: ToastKind) {
        self.ctx.dispatch(ToastAction::Push {
            title: title.to_string(),
            message: message.to_string(),
            kind,
        });
    }
}

/// Reads the toast context provided at the application root.
#[hook]
pub fn use_toast() -> ToastHandle {
    let ctx = use_context::<ToastContext>().expect("ToastContext not provided");
    ToastHandle { ctx }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let state = Rc::new(ToastState::default());
        let state = state.reduce(ToastAction::Push {
            title: "Fatura salva".to_string(),
            message: "ok".to_string(),
            kind: ToastKind::Success,
        });
        let state = state.reduce(ToastAction::Push {
            title: "Erro".to_string(),
            message: "falhou".to_string(),
            kind: ToastKind::Error,
        });

        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].id, 0);
        assert_eq!(state.toasts[1].id, 1);

        let state = state.reduce(ToastAction::Dismiss(0));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].title, "Erro");
    }
}
