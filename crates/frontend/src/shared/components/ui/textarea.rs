use contracts::shared::text::count_words;
use leptos::prelude::*;

use super::FieldLabel;

/// Multi-line text field. Direction defaults to `auto` so right-to-left
/// targets render correctly; `show_word_count` adds a live counter.
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] dir: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional)] show_word_count: bool,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <FieldLabel label=label target=Signal::derive(textarea_id) />
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                dir=move || dir.get().unwrap_or_else(|| "auto".to_string())
                disabled=move || disabled.get()
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <Show when=move || show_word_count>
                <div class="form__hint">
                    {move || format!("{} words", value.with(|v| count_words(v)))}
                </div>
            </Show>
        </div>
    }
}
