//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - User info and role
//! - Theme toggle
//! - Logout

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();

    let user_label = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map(|u| format!("{} ({})", u.display_name(), u.role.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Translation Workflow"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <div class="top-header__user">
                    <span>{user_label}</span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| do_logout(auth) title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
