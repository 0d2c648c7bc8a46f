use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::browser::{BrowserPorts, ToastContext};
use crate::components::DobPickerModal;
use crate::models::{AppPage, Gender};
use crate::registration::validation::FIRST_NAME_MAX_LEN;
use crate::registration::{DobBounds, DobPicker, RegistrationDraft, RegistrationMode, SubmitError};

const TERMS_URL: &str = "https://enrol.app/legal/terms";
const PRIVACY_URL: &str = "https://enrol.app/legal/privacy";
const IMPRINT_URL: &str = "https://enrol.app/legal/imprint";
const REFERRAL_PLACEHOLDER: &str = "c2f2-29be-4933-b9b9-3efa";

/// Query parameter set by the caller when registering with email + password.
pub const REGISTER_EMAIL_PARAM: &str = "registerEmail";

/// Link into the email + password variant of the screen.
pub fn email_registration_href() -> String {
    format!("{}?{}=1", AppPage::Register.path(), REGISTER_EMAIL_PARAM)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let query = use_query_map();
    let mode =
        RegistrationMode::from_param(query.read_untracked().get(REGISTER_EMAIL_PARAM).as_deref());
    let email_mode = mode.is_email();

    let today = Local::now().date_naive();
    let draft = RwSignal::new(RegistrationDraft::new(mode, today));
    let picker = RwSignal::new(DobPicker::new(DobBounds::for_today(today)));

    let toast = expect_context::<ToastContext>();
    let navigate = use_navigate();

    // Prefill the first name saved by an earlier session.
    let mount_navigate = navigate.clone();
    Effect::new(move |_| {
        let ports = BrowserPorts::new(mount_navigate.clone(), toast);
        spawn_local(async move {
            match ports.screen().saved_first_name().await {
                Ok(saved) => {
                    draft.try_update(|d| d.restore_first_name(saved));
                }
                Err(e) => tracing::warn!(error = %e, "could not read saved first name"),
            }
        });
    });

    let submit = Action::new_local(move |snapshot: &RegistrationDraft| {
        let snapshot = snapshot.clone();
        let ports = BrowserPorts::new(navigate.clone(), toast);
        async move { ports.screen().submit(&snapshot).await }
    });

    let failure = move || {
        submit.value().get().and_then(|result| match result {
            Err(SubmitError::Incomplete(_)) | Ok(_) => None,
            Err(e) => Some(e.to_string()),
        })
    };

    let password_secure =
        move || draft.with(|d| d.credentials().is_some_and(|c| c.password_secure));

    view! {
        <div class="auth-page">
            <div class="auth-card register-card">
                <h1>"Create Account"</h1>
                <p class="subtitle">"Tell us a little about yourself"</p>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit.dispatch(draft.get_untracked());
                }>
                    {email_mode.then(|| view! {
                        <div class="form-group">
                            <label for="email">"Email" <span class="required">" *"</span></label>
                            <input
                                type="email"
                                id="email"
                                autocapitalize="none"
                                prop:value=move || draft.with(|d| d.credentials().map(|c| c.email.clone()).unwrap_or_default())
                                on:input=move |ev| draft.update(|d| d.update_email(event_target_value(&ev)))
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                autocapitalize="none"
                                prop:value=move || draft.with(|d| d.credentials().map(|c| c.password.clone()).unwrap_or_default())
                                on:input=move |ev| draft.update(|d| d.update_password(event_target_value(&ev)))
                            />
                            <Show when=move || !password_secure()>
                                <p class="field-warning">
                                    "Use at least 7 characters with letters and numbers."
                                </p>
                            </Show>
                        </div>
                    })}

                    <div class="form-group">
                        <label for="first-name">"First name" <span class="required">" *"</span></label>
                        <input
                            type="text"
                            id="first-name"
                            autocapitalize="none"
                            maxlength=FIRST_NAME_MAX_LEN.to_string()
                            prop:value=move || draft.with(|d| d.first_name.clone())
                            on:input=move |ev| draft.update(|d| d.set_first_name(&event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Date of birth" <span class="required">" *"</span></label>
                        <button type="button" class="btn btn-date" on:click=move |_| picker.update(|p| p.show())>
                            {move || draft.with(|d| d.date_of_birth.format("%Y-%m-%d").to_string())}
                        </button>
                    </div>

                    <fieldset class="form-group">
                        <legend>"Gender" <span class="required">" *"</span></legend>
                        {Gender::all()
                            .into_iter()
                            .map(|gender| {
                                view! {
                                    <label class="radio-item">
                                        <span>{gender.label()}</span>
                                        <input
                                            type="radio"
                                            name="gender"
                                            value=gender.code().to_string()
                                            prop:checked=move || draft.with(|d| d.gender == gender)
                                            on:change=move |_| draft.update(|d| d.set_gender(gender))
                                        />
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>

                    <div class="form-group">
                        <label for="referrer-code">"Referral code (optional)"</label>
                        <input
                            type="text"
                            id="referrer-code"
                            autocapitalize="none"
                            placeholder=REFERRAL_PLACEHOLDER
                            prop:value=move || draft.with(|d| d.referrer_code.clone())
                            on:input=move |ev| draft.update(|d| d.set_referrer_code(event_target_value(&ev)))
                        />
                    </div>

                    <div class="consent-row">
                        <input
                            type="checkbox"
                            role="switch"
                            id="tos"
                            prop:checked=move || draft.with(|d| d.terms_accepted)
                            on:change=move |_| draft.update(|d| d.toggle_terms())
                        />
                        <label for="tos">"I agree to the terms of service."</label>
                        <a href=TERMS_URL target="_blank" rel="noopener noreferrer">" Link"</a>
                    </div>

                    <div class="consent-row">
                        <input
                            type="checkbox"
                            role="switch"
                            id="privacy"
                            prop:checked=move || draft.with(|d| d.privacy_accepted)
                            on:change=move |_| draft.update(|d| d.toggle_privacy())
                        />
                        <label for="privacy">"I agree to the privacy policy."</label>
                        <a href=PRIVACY_URL target="_blank" rel="noopener noreferrer">" Link"</a>
                    </div>

                    <p class="required">"Fields marked with * are required."</p>

                    <button type="submit" class="btn btn-primary" disabled=move || submit.pending().get()>
                        {move || if submit.pending().get() { "Creating account..." } else { "Create Account" }}
                    </button>

                    {move || failure().map(|e| view! { <p class="error">{e}</p> })}
                </form>

                <div class="auth-links">
                    <a href=IMPRINT_URL target="_blank" rel="noopener noreferrer">"Imprint"</a>
                </div>
            </div>

            <DobPickerModal
                picker=picker
                current=Signal::derive(move || draft.with(|d| d.date_of_birth))
                on_confirm=move |date| draft.update(|d| d.set_date_of_birth(date))
            />
        </div>
    }
}
