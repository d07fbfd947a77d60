use contracts::shared::status_badge::Severity;
use leptos::prelude::*;

/// Static label coloured by a [`Severity`] (roles, account state).
/// Workflow statuses go through `StatusBadge` instead.
#[component]
pub fn LabelBadge(
    #[prop(optional)] severity: Option<Severity>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "badge {}",
        severity.unwrap_or(Severity::Neutral).css_class()
    );

    view! { <span class=class>{children()}</span> }
}
