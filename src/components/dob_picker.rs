use chrono::NaiveDate;
use leptos::prelude::*;

use crate::registration::DobPicker;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Modal date-of-birth picker. Selection is limited to the picker's bounds.
#[component]
pub fn DobPickerModal(
    picker: RwSignal<DobPicker>,
    #[prop(into)] current: Signal<NaiveDate>,
    #[prop(into)] on_confirm: Callback<NaiveDate>,
) -> impl IntoView {
    let bounds = picker.get_untracked().bounds();
    let (choice, set_choice) = signal(current.get_untracked());

    // Re-seed the input every time the modal opens.
    Effect::new(move |_| {
        if picker.with(|p| p.is_visible()) {
            set_choice.set(current.get_untracked());
        }
    });

    let confirm = move |_| {
        let mut committed = None;
        picker.update(|p| committed = p.confirm(choice.get_untracked()));
        if let Some(date) = committed {
            on_confirm.run(date);
        }
    };

    view! {
        <Show when=move || picker.with(|p| p.is_visible())>
            <div class="modal-backdrop" on:click=move |_| picker.update(|p| p.cancel())></div>
            <div class="modal" role="dialog" aria-label="Date of birth">
                <input
                    type="date"
                    class="date-input"
                    min=bounds.earliest.format(DATE_FORMAT).to_string()
                    max=bounds.latest.format(DATE_FORMAT).to_string()
                    prop:value=move || choice.get().format(DATE_FORMAT).to_string()
                    on:change=move |ev| {
                        if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), DATE_FORMAT) {
                            set_choice.set(date);
                        }
                    }
                />
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| picker.update(|p| p.cancel())>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled=move || !bounds.contains(choice.get())
                        on:click=confirm
                    >
                        "Confirm"
                    </button>
                </div>
            </div>
        </Show>
    }
}
