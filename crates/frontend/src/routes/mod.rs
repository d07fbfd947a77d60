use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::domain::a001_project::ui::list::ProjectsListPage;
use crate::domain::a002_paragraph::ui::list::ParagraphsListPage;
use crate::domain::a003_translation::ui::review::ReviewPage;
use crate::domain::a003_translation::ui::session::TranslationSessionPage;
use crate::domain::a004_assignment::ui::list::MyAssignmentsPage;
use crate::layout::left::sidebar::home_path;
use crate::layout::Shell;
use crate::system::auth::context::{current_role, use_auth};
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::TeamListPage;

fn parse_id(raw: Option<String>) -> Option<EntityId> {
    raw.and_then(|v| v.trim().parse().ok())
}

/// Numeric route parameter, `None` when absent or malformed
pub fn use_id_param(name: &'static str) -> Memo<Option<EntityId>> {
    let params = use_params_map();
    Memo::new(move |_| parse_id(params.with(|p| p.get(name))))
}

#[component]
fn HomeRedirect() -> impl IntoView {
    let path = current_role().map(home_path).unwrap_or("/assignments");
    view! { <Redirect path=path /> }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell>
            <Routes fallback=|| view! { <div class="alert alert--error">"Page not found"</div> }>
                <Route path=path!("/") view=HomeRedirect />
                <Route path=path!("/projects") view=ProjectsListPage />
                <Route path=path!("/projects/:id/paragraphs") view=ParagraphsListPage />
                <Route path=path!("/projects/:id/review") view=ReviewPage />
                <Route path=path!("/assignments") view=MyAssignmentsPage />
                <Route path=path!("/assignments/:id/translate") view=TranslationSessionPage />
                <Route path=path!("/team") view=TeamListPage />
            </Routes>
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Router>
            <Show
                when=move || auth.with(|a| a.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Router>
    }
}
