mod state;

use contracts::domain::a002_paragraph::aggregate::{CreateParagraph, Paragraph, ParagraphType};
use contracts::domain::common::EntityId;
use contracts::enums::UserRole;
use contracts::shared::text::split_into_paragraphs;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_project::api as project_api;
use crate::domain::a002_paragraph::api;
use crate::routes::use_id_param;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::list_view::SortDirection;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::{api_client, use_auth};
use crate::system::auth::guard::RequireRole;
use state::{create_state, last_position, FILTER_TYPE};

#[component]
pub fn ParagraphsListPage() -> impl IntoView {
    let project_id = use_id_param("id");

    view! {
        <RequireRole roles=vec![UserRole::DataEntry, UserRole::Supervisor, UserRole::Manager]>
            {move || match project_id.get() {
                Some(id) => view! { <ParagraphsList project_id=id /> }.into_any(),
                None => view! { <div class="alert alert--error">"Unknown project"</div> }.into_any(),
            }}
        </RequireRole>
    }
}

#[component]
fn ParagraphsList(project_id: EntityId) -> impl IntoView {
    let auth = use_auth();
    let list = create_state();
    let project_name = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = api_client(auth);
        spawn_local(async move {
            let result = futures::try_join!(
                project_api::get_project(&client, project_id),
                api::list_by_project(&client, project_id),
            );
            match result {
                Ok((project, paragraphs)) => {
                    project_name.set(project.name);
                    list.update(|c| c.set_items(paragraphs));
                }
                Err(e) => {
                    log::error!("failed to load paragraphs of project {}: {}", project_id, e);
                    set_error.set(Some(format!("Failed to load paragraphs: {}", e)));
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

    let delete = move |id: EntityId| {
        set_error.set(None);
        let client = api_client(auth);
        spawn_local(async move {
            match api::delete_paragraph(&client, id).await {
                Ok(()) => list.update(|c| c.remove_item(&id)),
                Err(e) => {
                    log::error!("failed to delete paragraph {}: {}", id, e);
                    set_error.set(Some(format!("Failed to delete paragraph: {}", e)));
                }
            }
        });
    };

    let sort_field = Signal::derive(move || {
        list.with(|c| c.filter_state().sort_key.clone().unwrap_or_default())
    });
    let sort_ascending =
        Signal::derive(move || list.with(|c| c.filter_state().sort_direction.is_ascending()));
    let on_sort = Callback::new(move |field: String| {
        list.update(|c| c.set_sort(&field, SortDirection::Ascending))
    });

    let types = Signal::derive(move || list.with(|c| c.distinct_values(FILTER_TYPE)));
    let type_filter = Signal::derive(move || list.with(|c| c.filter_state().filter_or_all(FILTER_TYPE)));

    view! {
        <PageFrame page_id="a002_paragraph--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || format!("Paragraphs: {}", project_name.get())}</h1>
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

                <SplitAndAddForm
                    project_id=project_id
                    next_after=Signal::derive(move || list.with(|c| last_position(c.items())))
                    on_created=Callback::new(move |p: Paragraph| list.update(|c| c.replace_item(p)))
                />

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
                                <Input value=search placeholder="Source text..." />
                            </div>
                            <FilterSelect
                                label="Type"
                                values=types
                                value=type_filter
                                on_change=Callback::new(move |v: String| {
                                    list.update(|c| c.set_equality_filter(FILTER_TYPE, &v))
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
                                    label="#"
                                    sort_field="position"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                    min_width=60.0
                                />
                                <SortableHeaderCell
                                    label="Type"
                                    sort_field="type"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                    min_width=90.0
                                />
                                <TableHeaderCell resizable=false min_width=320.0>"Source text"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Words"
                                    sort_field="word_count"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                    min_width=70.0
                                />
                                <TableHeaderCell resizable=false min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.with(|c| c.visible().to_vec())
                                key=|p: &Paragraph| p.id
                                children=move |paragraph| {
                                    let id = paragraph.id;
                                    let words = paragraph.computed_word_count();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{paragraph.position}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{paragraph.paragraph_type.as_str()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="paragraph-text" dir="auto">{paragraph.original_text.clone()}</div>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{words}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete(id)
                                                    attr:title="Delete"
                                                >
                                                    {icon("delete")}
                                                </Button>
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

/// Pasted source text, split on blank lines and appended after the last paragraph
#[component]
fn SplitAndAddForm(
    project_id: EntityId,
    #[prop(into)] next_after: Signal<u32>,
    on_created: Callback<Paragraph>,
) -> impl IntoView {
    let auth = use_auth();
    let text = RwSignal::new(String::new());
    let kind = RwSignal::new(ParagraphType::default().as_str().to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let block_count = Signal::derive(move || text.with(|t| split_into_paragraphs(t).len()));
    let type_options = Signal::derive(|| {
        ParagraphType::all()
            .iter()
            .map(|t| (t.as_str().to_string(), t.as_str().to_string()))
            .collect::<Vec<_>>()
    });

    let on_add = move |_| {
        let blocks = split_into_paragraphs(&text.get_untracked());
        if blocks.is_empty() {
            set_error.set(Some("Nothing to add: the text is empty".to_string()));
            return;
        }
        let paragraph_type = ParagraphType::all()
            .into_iter()
            .find(|t| t.as_str() == kind.get_untracked())
            .unwrap_or_default();
        let requests =
            CreateParagraph::batch_after(project_id, next_after.get_untracked(), blocks, paragraph_type);

        set_saving.set(true);
        set_error.set(None);
        let client = api_client(auth);
        spawn_local(async move {
            let total = requests.len();
            for (done, request) in requests.iter().enumerate() {
                match api::create_paragraph(&client, request).await {
                    Ok(created) => on_created.run(created),
                    Err(e) => {
                        log::error!("paragraph {} of {} not created: {}", done + 1, total, e);
                        set_error.set(Some(format!(
                            "Added {} of {} paragraphs: {}",
                            done, total, e
                        )));
                        set_saving.set(false);
                        return;
                    }
                }
            }
            text.set(String::new());
            set_saving.set(false);
        });
    };

    view! {
        <div class="card split-form">
            <h3 class="card__title">"Split & add"</h3>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Textarea
                value=Signal::derive(move || text.get())
                on_input=Callback::new(move |v: String| text.set(v))
                placeholder="Paste source text; blank lines separate paragraphs"
                rows=6
                show_word_count=true
                disabled=Signal::derive(move || saving.get())
            />
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Select
                    label="Type"
                    value=Signal::derive(move || kind.get())
                    options=type_options
                    on_change=Callback::new(move |v: String| kind.set(v))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_add
                    disabled=Signal::derive(move || saving.get() || block_count.get() == 0)
                >
                    {icon("plus")}
                    {move || format!(" Add {} paragraph(s)", block_count.get())}
                </Button>
            </Flex>
        </div>
    }
}
