use leptos::prelude::*;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! {
        <div class="onboarding-page">
            <section class="hero">
                <h1>"Welcome!"</h1>
                <p class="subtitle">"Your profile is complete. Let's get you set up."</p>
            </section>
        </div>
    }
}
