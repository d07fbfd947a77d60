use leptos::prelude::*;

use super::FieldLabel;

/// Native `<select>` over `(value, label)` pairs
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    let option_views = move || {
        let current = value.get();
        options
            .get()
            .into_iter()
            .map(|(val, text)| {
                let selected = val == current;
                view! { <option value=val selected=selected>{text}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="form__group">
            <FieldLabel label=label target=Signal::derive(select_id) />
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {option_views}
            </select>
        </div>
    }
}
