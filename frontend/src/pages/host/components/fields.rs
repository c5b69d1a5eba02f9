use crate::pages::host::utils::{field_label, input_type, SessionFormState};
use crate::sessions::{SessionField, PLAYER_LEVELS};
use leptos::*;

const INPUT_CLASS: &str =
    "w-full p-2 rounded-lg bg-gray-700 text-white border border-gray-600 focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
fn FieldInput(form: SessionFormState, field: SessionField) -> impl IntoView {
    let value = form.signal(field);
    let control = match field {
        SessionField::PlayerLevel => view! {
            <select
                id=field.name()
                name=field.name()
                class=INPUT_CLASS
                required=true
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"Select Level"</option>
                {PLAYER_LEVELS
                    .iter()
                    .map(|level| view! { <option value=*level>{*level}</option> })
                    .collect_view()}
            </select>
        }
        .into_view(),
        SessionField::Remarks => view! {
            <textarea
                id=field.name()
                name=field.name()
                rows=3
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_view(),
        _ => view! {
            <input
                type=input_type(field)
                id=field.name()
                name=field.name()
                class=INPUT_CLASS
                required=field.is_required()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_view(),
    };
    view! {
        <div>
            <label for=field.name() class="block mb-2 text-sm font-medium text-gray-300">
                {field_label(field)}
            </label>
            {control}
        </div>
    }
}

/// Inputs for every editable session field, bound to `form`.
#[component]
pub fn SessionFields(form: SessionFormState) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {SessionField::ALL
                .into_iter()
                .filter(|field| *field != SessionField::Remarks)
                .map(|field| view! { <FieldInput form=form field=field /> })
                .collect_view()}
        </div>
        <div class="mt-4">
            <FieldInput form=form field=SessionField::Remarks />
        </div>
    }
}
