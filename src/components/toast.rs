use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_toast::{Toast, use_toast};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Each toast dismisses itself after the configured delay.
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            spawn_local(async move {
                TimeoutFuture::new(Config::TOAST_MS).await;
                on_dismiss.emit(id);
            });
            || ()
        });
    }

    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.kind.css_class())} role="status">
            <div class="toast-body">
                <strong class="toast-title">{&props.toast.title}</strong>
                <p class="toast-message">{&props.toast.message}</p>
            </div>
            <button class="toast-close" {onclick} aria-label="Fechar">{"×"}</button>
        </div>
    }
}

/// Renders the active toasts; lives once at the application root.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toasts = use_toast();

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dismiss(id))
    };

    html! {
        <div class="toast-host" aria-live="polite">
            {
                toasts.toasts().into_iter().map(|toast| {
                    let key = toast.id;
                    html! {
                        <ToastItem
                            {key}
                            {toast}
                            on_dismiss={on_dismiss.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
