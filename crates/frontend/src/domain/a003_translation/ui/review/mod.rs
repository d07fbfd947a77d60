mod actions;

use contracts::domain::a002_paragraph::aggregate::Paragraph;
use contracts::domain::a003_translation::aggregate::{Translation, TranslationStatus, TranslationUpsert};
use contracts::domain::common::{EntityId, WorkflowStatus};
use contracts::enums::UserRole;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::*;

use crate::domain::a003_translation::api::{HttpTranslationApi, TranslationApi};
use crate::routes::use_id_param;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::context::{api_client, current_role, use_auth};
use crate::system::auth::guard::RequireRole;
use actions::{review_actions, ReviewAction};

#[component]
pub fn ReviewPage() -> impl IntoView {
    let project_id = use_id_param("id");

    view! {
        <RequireRole roles=vec![UserRole::Reviewer, UserRole::Supervisor, UserRole::Manager]>
            {move || match project_id.get() {
                Some(id) => view! { <ReviewList project_id=id /> }.into_any(),
                None => view! { <div class="alert alert--error">"Unknown project"</div> }.into_any(),
            }}
        </RequireRole>
    }
}

/// Replaces the translation with the same id inside its paragraph
fn apply_update(paragraphs: &mut [Paragraph], updated: Translation) {
    if let Some(slot) = paragraphs
        .iter_mut()
        .filter(|p| p.id == updated.paragraph_id)
        .flat_map(|p| p.translations.iter_mut())
        .find(|t| t.id == updated.id)
    {
        *slot = updated;
    }
}

#[component]
fn ReviewList(project_id: EntityId) -> impl IntoView {
    let auth = use_auth();
    let role = current_role().unwrap_or_default();
    let project_name = RwSignal::new(String::new());
    let paragraphs: RwSignal<Vec<Paragraph>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let api = HttpTranslationApi::new(api_client(auth));
        spawn_local(async move {
            let result = futures::try_join!(
                api.get_project(project_id),
                api.list_paragraphs(project_id),
            );
            match result {
                Ok((project, mut data)) => {
                    data.sort_by_key(|p| p.position);
                    project_name.set(project.name);
                    paragraphs.set(data);
                }
                Err(e) => {
                    log::error!("failed to load review of project {}: {}", project_id, e);
                    set_error.set(Some(format!("Failed to load translations: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let apply = move |translation: Translation, action: ReviewAction| {
        set_error.set(None);
        if let Err(e) = translation.status.transition(action.target) {
            set_error.set(Some(e.to_string()));
            return;
        }
        let api = HttpTranslationApi::new(api_client(auth));
        spawn_local(async move {
            let body = TranslationUpsert::with_status(&translation, action.target);
            match api.update_translation(translation.id, &body).await {
                Ok(updated) => paragraphs.update(|list| apply_update(list, updated)),
                Err(e) => {
                    log::error!("failed to update translation {}: {}", translation.id, e);
                    set_error.set(Some(format!("{} failed: {}", action.label, e)));
                }
            }
        });
    };

    let pending_count = Signal::derive(move || {
        paragraphs.with(|list| {
            list.iter()
                .filter_map(|p| p.latest_translation())
                .filter(|t| t.status == TranslationStatus::Submitted)
                .count()
        })
    });

    view! {
        <PageFrame page_id="a003_translation--review" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || format!("Review: {}", project_name.get())}</h1>
                    <Badge>{move || format!("{} awaiting review", pending_count.get())}</Badge>
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

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"#"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>"Source"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>"Translation"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || paragraphs.get()
                                key=|p: &Paragraph| (p.id, p.latest_translation().map(|t| (t.id, t.status)))
                                children=move |paragraph| {
                                    let latest = paragraph.latest_translation().cloned();
                                    let text = latest.as_ref().map(|t| t.text.clone()).unwrap_or_default();
                                    let status = latest
                                        .as_ref()
                                        .map(|t| t.status.as_str().to_string())
                                        .unwrap_or_else(|| "Not started".to_string());
                                    let buttons = latest
                                        .map(|t| {
                                            review_actions(role, t.status)
                                                .into_iter()
                                                .map(|action| {
                                                    let t = t.clone();
                                                    let appearance = if action.target == TranslationStatus::Rejected {
                                                        ButtonAppearance::Secondary
                                                    } else {
                                                        ButtonAppearance::Primary
                                                    };
                                                    view! {
                                                        <Button
                                                            appearance=appearance
                                                            on_click=move |_| apply(t.clone(), action)
                                                        >
                                                            {action.label}
                                                        </Button>
                                                    }
                                                })
                                                .collect_view()
                                        });
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{paragraph.position}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="paragraph-text" dir="auto">{paragraph.original_text.clone()}</div>
                                            </TableCell>
                                            <TableCell>
                                                <div class="paragraph-text" dir="auto">{text}</div>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>{buttons}</Flex>
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_paragraph::aggregate::ParagraphType;

    fn translation(id: EntityId, paragraph_id: EntityId, status: TranslationStatus) -> Translation {
        Translation {
            id,
            paragraph_id,
            assignment_id: 9,
            text: "نص".to_string(),
            status,
            word_count: 1,
            updated_at: None,
        }
    }

    #[test]
    fn test_apply_update_replaces_matching_translation() {
        let mut list = vec![Paragraph {
            id: 100,
            project_id: 7,
            original_text: "Text".to_string(),
            paragraph_type: ParagraphType::Body,
            position: 1,
            word_count: 1,
            translations: vec![
                translation(1, 100, TranslationStatus::Rejected),
                translation(2, 100, TranslationStatus::Submitted),
            ],
        }];
        apply_update(&mut list, translation(2, 100, TranslationStatus::Approved));
        assert_eq!(list[0].translations[0].status, TranslationStatus::Rejected);
        assert_eq!(
            list[0].latest_translation().map(|t| t.status),
            Some(TranslationStatus::Approved)
        );

        apply_update(&mut list, translation(3, 100, TranslationStatus::Approved));
        assert_eq!(list[0].translations.len(), 2);
    }
}
