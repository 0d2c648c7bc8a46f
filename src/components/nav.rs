use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::AppPage;
use crate::pages::email_registration_href;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <A href="/">"Enrol"</A>
            </div>

            <div class="nav-links">
                <A href=AppPage::Login.path()>"Sign In"</A>
                <A href=email_registration_href()>"Register"</A>
            </div>
        </nav>
    }
}
