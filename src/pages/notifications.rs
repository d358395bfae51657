use yew::prelude::*;

use crate::components::{BottomNavigation, DashboardHeader};
use crate::models::notification::{Notification, mock_notifications, unread_count};

/// Notification feed: canned entries, session-local read/dismiss state.
#[function_component(NotificationsPage)]
pub fn notifications_page() -> Html {
    let notifications = use_state(mock_notifications);
    let unread = unread_count(&notifications);

    let mark_read = {
        let notifications = notifications.clone();
        Callback::from(move |id: String| {
            let mut updated = (*notifications).clone();
            crate::models::notification::mark_read(&mut updated, &id);
            notifications.set(updated);
        })
    };

    let mark_all_read = {
        let notifications = notifications.clone();
        Callback::from(move |_| {
            let updated: Vec<Notification> = notifications
                .iter()
                .map(|n| Notification {
                    read: true,
                    ..n.clone()
                })
                .collect();
            notifications.set(updated);
        })
    };

    let dismiss = {
        let notifications = notifications.clone();
        Callback::from(move |id: String| {
            let updated: Vec<Notification> = notifications
                .iter()
                .filter(|n| n.id != id)
                .cloned()
                .collect();
            notifications.set(updated);
        })
    };

    html! {
        <div class="page">
            <DashboardHeader />

            <main class="page-body">
                <div class="notifications-header">
                    <h1>{"Notificações"}</h1>
                    if unread > 0 {
                        <button class="btn-secondary" onclick={mark_all_read}>
                            {"Marcar todas como lidas"}
                        </button>
                    }
                </div>

                if notifications.is_empty() {
                    <div class="empty-state">
                        <span class="empty-icon">{"🔔"}</span>
                        <p>{"Nenhuma notificação."}</p>
                    </div>
                }

                {
                    notifications.iter().map(|n| {
                        let class = if n.read {
                            classes!("notification-card", n.kind.css_class(), "read")
                        } else {
                            classes!("notification-card", n.kind.css_class())
                        };
                        let on_read = {
                            let id = n.id.clone();
                            let mark_read = mark_read.clone();
                            Callback::from(move |_| mark_read.emit(id.clone()))
                        };
                        let on_dismiss = {
                            let id = n.id.clone();
                            let dismiss = dismiss.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                dismiss.emit(id.clone());
                            })
                        };
                        html! {
                            <div {class} key={n.id.clone()} onclick={on_read}>
                                <span class="notification-icon">{n.kind.icon()}</span>
                                <div class="notification-body">
                                    <h3>{&n.title}</h3>
                                    <p class="muted">{&n.message}</p>
                                    <span class="notification-date">{&n.date}</span>
                                </div>
                                <button class="toast-close" onclick={on_dismiss} aria-label="Remover">
                                    {"×"}
                                </button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </main>

            <BottomNavigation />
        </div>
    }
}
