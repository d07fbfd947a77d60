mod state;

use contracts::enums::UserRole;
use contracts::shared::status_badge::Severity;
use contracts::system::users::TeamMember;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::*;

use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::components::ui::LabelBadge;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_view::SortDirection;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{api_client, use_auth};
use crate::system::auth::guard::RequireRole;
use crate::system::users::api;
use state::{active_label, create_state, FILTER_ACTIVE, FILTER_ROLE};

#[component]
pub fn TeamListPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![UserRole::Supervisor, UserRole::Manager]>
            <TeamList />
        </RequireRole>
    }
}

#[component]
fn TeamList() -> impl IntoView {
    let auth = use_auth();
    let list = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = api_client(auth);
        spawn_local(async move {
            match api::fetch_team(&client).await {
                Ok(data) => list.update(|c| c.set_items(data)),
                Err(e) => {
                    log::error!("failed to load team: {}", e);
                    set_error.set(Some(format!("Failed to load team members: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    Effect::new(move |_| {
        let term = search.get();
        list.update(|c| c.set_search_term(&term));
    });

    let sort_field = Signal::derive(move || {
        list.with(|c| c.filter_state().sort_key.clone().unwrap_or_default())
    });
    let sort_ascending =
        Signal::derive(move || list.with(|c| c.filter_state().sort_direction.is_ascending()));
    let on_sort = Callback::new(move |field: String| {
        list.update(|c| c.set_sort(&field, SortDirection::Ascending))
    });

    let role_values = Signal::derive(|| {
        UserRole::all()
            .iter()
            .map(|r| r.code().to_string())
            .collect::<Vec<_>>()
    });
    let role_filter = Signal::derive(move || list.with(|c| c.filter_state().filter_or_all(FILTER_ROLE)));
    let active_values = Signal::derive(move || list.with(|c| c.distinct_values(FILTER_ACTIVE)));
    let active_filter = Signal::derive(move || list.with(|c| c.filter_state().filter_or_all(FILTER_ACTIVE)));

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Team"</h1>
                    <Badge>{move || list.with(|c| c.total_count()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Search"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || list.with(|c| c.page()))
                                total_pages=Signal::derive(move || list.with(|c| c.total_pages()))
                                total_count=Signal::derive(move || list.with(|c| c.total_count()))
                                page_size=Signal::derive(move || list.with(|c| c.page_size()))
                                on_page_change=Callback::new(move |page| list.update(|c| c.set_page(page)))
                                on_page_size_change=Callback::new(move |size| list.update(|c| c.set_page_size(size)))
                            />
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search placeholder="Login, name or email..." />
                            </div>
                            <FilterSelect
                                label="Role"
                                values=role_values
                                value=role_filter
                                on_change=Callback::new(move |v: String| {
                                    list.update(|c| c.set_equality_filter(FILTER_ROLE, &v))
                                })
                            />
                            <FilterSelect
                                label="State"
                                values=active_values
                                value=active_filter
                                on_change=Callback::new(move |v: String| {
                                    list.update(|c| c.set_equality_filter(FILTER_ACTIVE, &v))
                                })
                            />
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Login"
                                    sort_field="username"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                    min_width=140.0
                                />
                                <SortableHeaderCell
                                    label="Name"
                                    sort_field="full_name"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                    min_width=160.0
                                />
                                <TableHeaderCell resizable=false min_width=160.0>"Email"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Role"
                                    sort_field="role"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                />
                                <TableHeaderCell resizable=false min_width=100.0>"Languages"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"State"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Joined"
                                    sort_field="created_at"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.with(|c| c.visible().to_vec())
                                key=|m: &TeamMember| m.id
                                children=move |member| {
                                    let state_severity = if member.is_active { Severity::Success } else { Severity::Error };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{member.username.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {member.full_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {member.email.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <LabelBadge severity=Severity::Info>{member.role.display_name()}</LabelBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{member.languages.join(", ")}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <LabelBadge severity=state_severity>{active_label(member.is_active)}</LabelBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date_opt(member.created_at.as_ref())}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
