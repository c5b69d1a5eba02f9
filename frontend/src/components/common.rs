use leptos::*;

/// Primary buttons submit the surrounding form; secondary ones only run
/// their click handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary hover:bg-opacity-90 text-gray-900 shadow-sm",
            ButtonVariant::Secondary => "bg-gray-600 hover:bg-gray-500 text-white",
        }
    }

    pub fn button_type(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "submit",
            ButtonVariant::Secondary => "button",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold disabled:opacity-50 {} {}",
        variant.classes(),
        class
    );
    view! {
        <button
            type=variant.button_type()
            class=classes
            disabled=move || loading.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}
