use leptos::prelude::*;

use crate::browser::ToastContext;

#[cfg(feature = "hydrate")]
const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(4);

/// Shows the current transient message and clears it after a few seconds.
#[component]
pub fn Toast() -> impl IntoView {
    let ToastContext(message) = expect_context::<ToastContext>();

    Effect::new(move |_| {
        if message.get().is_some() {
            #[cfg(feature = "hydrate")]
            set_timeout(move || message.set(None), TOAST_DURATION);
        }
    });

    view! {
        {move || message.get().map(|text| view! {
            <div class="toast" role="status" on:click=move |_| message.set(None)>
                {text}
            </div>
        })}
    }
}
