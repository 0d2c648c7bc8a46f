use leptos::prelude::*;
use leptos_router::components::A;

use super::email_registration_href;

/// Landing target after an email registration. Signing in itself is handled
/// by the identity provider of the host app.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p class="instructions">
                    "Confirm your email address using the link we sent you, then sign in."
                </p>

                <div class="auth-links">
                    <span>"No account yet? "</span>
                    <A href=email_registration_href()>"Create account"</A>
                </div>
            </div>
        </div>
    }
}
