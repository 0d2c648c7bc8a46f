use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::browser::ToastContext;
use crate::components::{Nav, Toast};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ToastContext(RwSignal::new(None)));

    view! {
        <Stylesheet id="leptos" href="/pkg/enrol.css"/>
        <Title text="Enrol - Create your account"/>
        <Meta name="description" content="Create your account and complete your profile"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/register"/> }/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/onboarding") view=OnboardingPage/>
                </Routes>
            </main>
            <Toast/>
        </Router>
    }
}
