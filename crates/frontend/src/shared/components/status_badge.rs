use contracts::shared::status_badge::classify_status;
use leptos::prelude::*;

/// Badge for any workflow status string (translation, assignment, project)
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Signal<String>,
) -> impl IntoView {
    let badge = Memo::new(move |_| classify_status(&status.get()));

    view! {
        <span class=move || format!("badge badge--status {}", badge.get().severity.css_class())>
            {move || badge.get().label}
        </span>
    }
}
