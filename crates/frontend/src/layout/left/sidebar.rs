//! Sidebar with the pages available to the signed-in role

use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const PROJECTS: MenuItem = MenuItem {
    href: "/projects",
    label: "Projects",
    icon: "folder",
};
const ASSIGNMENTS: MenuItem = MenuItem {
    href: "/assignments",
    label: "My assignments",
    icon: "file-text",
};
const TEAM: MenuItem = MenuItem {
    href: "/team",
    label: "Team",
    icon: "users",
};

pub fn menu_items(role: UserRole) -> Vec<MenuItem> {
    let mut items = Vec::new();
    if role.edits_paragraphs() {
        items.push(PROJECTS);
    }
    if role.has_assignments() {
        items.push(ASSIGNMENTS);
    }
    if role.oversees_projects() {
        items.push(TEAM);
    }
    items
}

/// Landing page of a role
pub fn home_path(role: UserRole) -> &'static str {
    menu_items(role)
        .first()
        .map(|item| item.href)
        .unwrap_or(ASSIGNMENTS.href)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    let items = move || auth.with(|a| a.role().map(menu_items).unwrap_or_default());

    view! {
        <div class="app-sidebar__content">
            <For
                each=items
                key=|item| item.href
                children=move |item| {
                    let class = move || {
                        if location.pathname.get().starts_with(item.href) {
                            "app-sidebar__item app-sidebar__item--active"
                        } else {
                            "app-sidebar__item"
                        }
                    };
                    view! {
                        <A href=item.href>
                            <div class=class style:padding-left="12px">
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_by_role() {
        assert_eq!(menu_items(UserRole::DataEntry), vec![PROJECTS]);
        assert_eq!(menu_items(UserRole::Translator), vec![ASSIGNMENTS]);
        assert_eq!(menu_items(UserRole::Manager), vec![PROJECTS, TEAM]);
    }

    #[test]
    fn test_home_path() {
        assert_eq!(home_path(UserRole::Reviewer), "/assignments");
        assert_eq!(home_path(UserRole::Supervisor), "/projects");
    }
}
