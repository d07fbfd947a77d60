mod state;

use contracts::domain::a004_assignment::aggregate::Assignment;
use contracts::domain::common::WorkflowStatus;
use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a004_assignment::api;
use crate::shared::api_client::ApiError;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_view::SortDirection;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::{api_client, use_auth};
use crate::system::auth::guard::RequireRole;
use state::{create_state, work_href, FILTER_ROLE, FILTER_STATUS};

#[component]
pub fn MyAssignmentsPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![UserRole::Translator, UserRole::Reviewer]>
            <MyAssignmentsList />
        </RequireRole>
    }
}

#[component]
fn MyAssignmentsList() -> impl IntoView {
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
            let result = match client.auth().user_id() {
                Some(user_id) => api::list_by_user(&client, user_id).await,
                None => Err(ApiError::NotAuthenticated),
            };
            match result {
                Ok(data) => list.update(|c| c.set_items(data)),
                Err(e) => {
                    log::error!("failed to load assignments: {}", e);
                    set_error.set(Some(format!("Failed to load assignments: {}", e)));
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

    let statuses = Signal::derive(move || list.with(|c| c.distinct_values(FILTER_STATUS)));
    let status_filter = Signal::derive(move || list.with(|c| c.filter_state().filter_or_all(FILTER_STATUS)));
    let roles = Signal::derive(move || list.with(|c| c.distinct_values(FILTER_ROLE)));
    let role_filter = Signal::derive(move || list.with(|c| c.filter_state().filter_or_all(FILTER_ROLE)));

    view! {
        <PageFrame page_id="a004_assignment--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My assignments"</h1>
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
                            <span class="filter-panel__title">"Filters"</span>
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
                                <Input value=search placeholder="Project or language..." />
                            </div>
                            <FilterSelect
                                label="Status"
                                values=statuses
                                value=status_filter
                                on_change=Callback::new(move |v: String| {
                                    list.update(|c| c.set_equality_filter(FILTER_STATUS, &v))
                                })
                            />
                            <FilterSelect
                                label="Role"
                                values=roles
                                value=role_filter
                                on_change=Callback::new(move |v: String| {
                                    list.update(|c| c.set_equality_filter(FILTER_ROLE, &v))
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
                                    label="Project"
                                    sort_field="project"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                    min_width=200.0
                                />
                                <TableHeaderCell resizable=false min_width=90.0>"Role"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Language"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Status"
                                    sort_field="status"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                />
                                <SortableHeaderCell
                                    label="Due"
                                    sort_field="due_date"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                />
                                <TableHeaderCell resizable=false min_width=100.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.with(|c| c.visible().to_vec())
                                key=|a: &Assignment| (a.id, a.status)
                                children=move |assignment| {
                                    let href = work_href(&assignment);
                                    let open = !assignment.status.is_terminal();
                                    let status = assignment.status.as_str().to_string();
                                    let project = assignment
                                        .project_name
                                        .clone()
                                        .unwrap_or_else(|| format!("Project #{}", assignment.project_id));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{project}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{assignment.role.as_str()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{assignment.target_language.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date_opt(assignment.due_date.as_ref())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {open.then(|| view! {
                                                    <A href=href>
                                                        {icon("edit")}
                                                        " Open"
                                                    </A>
                                                })}
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
