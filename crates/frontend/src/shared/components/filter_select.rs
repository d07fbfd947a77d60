use crate::shared::components::ui::Select;
use crate::shared::list_view::FILTER_ALL;
use leptos::prelude::*;

/// Equality-filter dropdown; the first option is the `All` sentinel
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,
    /// Selectable values (without the sentinel)
    #[prop(into)]
    values: Signal<Vec<String>>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        let mut opts = vec![(FILTER_ALL.to_string(), FILTER_ALL.to_string())];
        opts.extend(values.get().into_iter().map(|v| (v.clone(), v)));
        opts
    });

    view! {
        <div class="filter-panel__field">
            <Select label=label value=value options=options on_change=on_change />
        </div>
    }
}
