use contracts::enums::UserRole;
use leptos::prelude::*;

use super::context::use_auth;

/// Component that renders its children only for the listed roles
#[component]
pub fn RequireRole(
    /// Roles allowed to see the content
    roles: Vec<UserRole>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.with(|a| a.role().is_some_and(|r| roles.contains(&r)))
            fallback=|| view! { <div class="alert alert--error">"Access denied for your role."</div> }
        >
            {children()}
        </Show>
    }
}
