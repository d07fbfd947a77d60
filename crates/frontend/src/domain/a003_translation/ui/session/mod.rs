//! Translation session page: one paragraph at a time, drafts saved on demand
//! and by the autosave loop, final submit for the whole assignment.

use contracts::domain::common::{EntityId, WorkflowStatus};
use contracts::enums::UserRole;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::a003_translation::api::HttpTranslationApi;
use crate::domain::a003_translation::session::{
    SessionError, TranslationSession, TranslationSessionController,
};
use crate::routes::use_id_param;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::ui::Textarea;
use crate::shared::config::{AUTOSAVE_INTERVAL_MS, SUBMIT_REDIRECT_DELAY_MS};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::context::{api_client, use_auth};
use crate::system::auth::guard::RequireRole;

type Controller = TranslationSessionController<HttpTranslationApi>;

#[component]
pub fn TranslationSessionPage() -> impl IntoView {
    let assignment_id = use_id_param("id");

    view! {
        <RequireRole roles=vec![UserRole::Translator]>
            {move || match assignment_id.get() {
                Some(id) => view! { <TranslationSessionView assignment_id=id /> }.into_any(),
                None => view! { <div class="alert alert--error">"Unknown assignment"</div> }.into_any(),
            }}
        </RequireRole>
    }
}

#[component]
fn TranslationSessionView(assignment_id: EntityId) -> impl IntoView {
    let auth = use_auth();
    let controller = StoredValue::new_local(Controller::new(HttpTranslationApi::new(
        api_client(auth),
    )));
    let session: RwSignal<Option<TranslationSession>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);
    let autosave_on = RwSignal::new(true);
    let redirect_to = RwSignal::new(None::<String>);

    // Async tasks may finish after the page is gone; every access after an
    // `.await` goes through the `try_` accessors and is a no-op once disposed.
    let refresh = move || {
        sync_from(controller, session, |c| c.snapshot());
    };
    let report = move |e: SessionError| {
        log::error!("translation session: {}", e);
        set_notice.try_set(None);
        set_error.try_set(Some(e.to_string()));
    };

    spawn_local(async move {
        let Some(c) = controller.try_get_value() else {
            return;
        };
        set_busy.try_set(true);
        if let Err(e) = c.load_session(assignment_id).await {
            report(e);
        }
        refresh();
        set_busy.try_set(false);
    });

    // Stops on the first tick after unmount, when the controller is disposed
    spawn_local(async move {
        loop {
            TimeoutFuture::new(AUTOSAVE_INTERVAL_MS).await;
            let Some(c) = controller.try_get_value() else {
                break;
            };
            if c.autosave_tick().await {
                refresh();
            }
        }
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(path) = redirect_to.get() {
            navigate(&path, Default::default());
        }
    });

    let on_text = Callback::new(move |value: String| {
        let result = controller.with_value(|c| c.set_current_text(value));
        match result {
            Ok(()) => set_error.set(None),
            Err(e) => report(e),
        }
        refresh();
    });

    let navigate_to = move |step: Navigation| {
        controller.with_value(|c| match step {
            Navigation::Previous => c.go_previous(),
            Navigation::Next => c.go_next(),
            Navigation::Jump(index) => c.jump_to(index),
        });
        refresh();
    };

    let save_draft = move |_| {
        set_error.set(None);
        let Some(c) = controller.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match c.save_draft(None).await {
                Ok(_) => {
                    set_notice.try_set(Some("Draft saved".to_string()));
                }
                Err(e) => report(e),
            }
            refresh();
        });
    };

    let submit = move |_| {
        set_error.set(None);
        set_busy.set(true);
        let Some(c) = controller.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match c.submit().await {
                Ok(outcome) => {
                    refresh();
                    let mut message = format!("Submitted {} paragraph(s) for review", outcome.submitted);
                    if !outcome.reviewer_notified {
                        message.push_str(" (reviewer was not notified)");
                    }
                    set_notice.try_set(Some(message));
                    TimeoutFuture::new(SUBMIT_REDIRECT_DELAY_MS).await;
                    redirect_to.try_set(Some("/assignments".to_string()));
                }
                Err(e) => {
                    report(e);
                    refresh();
                    set_busy.try_set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        let enabled = autosave_on.get();
        controller.with_value(|c| c.set_autosave_enabled(enabled));
    });

    let current_text = Signal::derive(move || {
        session.with(|s| s.as_ref().and_then(|s| s.current()).map(|i| i.text.clone()).unwrap_or_default())
    });
    let current_locked = Signal::derive(move || {
        busy.get()
            || session.with(|s| !s.as_ref().and_then(|s| s.current()).is_some_and(|i| i.is_editable()))
    });

    view! {
        <PageFrame page_id="a003_translation--session" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || session.with(|s| s.as_ref().map(|s| s.project.name.clone()).unwrap_or_else(|| "Translation".to_string()))}
                    </h1>
                    {move || session.with(|s| s.as_ref().map(|s| {
                        let status = s.assignment.status.as_str().to_string();
                        view! { <StatusBadge status=status /> }
                    }))}
                </div>
                <div class="page__header-right">
                    <Checkbox checked=autosave_on label="Autosave" />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=save_draft
                        disabled=current_locked
                    >
                        {icon("save")}
                        " Save draft"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || busy.get() || session.with(|s| s.as_ref().map_or(true, |s| s.is_fully_submitted())))
                    >
                        {icon("send")}
                        " Submit"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

                {move || session.with(|s| s.as_ref().map(|s| {
                    let total = s.len();
                    let missing = s.incomplete_count();
                    view! {
                        <div class="session-progress">
                            <span>{format!("Paragraph {} of {}", (s.current_index() + 1).min(total), total)}</span>
                            <span>{format!("{} incomplete", missing)}</span>
                        </div>
                    }
                }))}

                <div class="session-navigator">
                    <For
                        each=move || session.with(|s| {
                            s.as_ref()
                                .map(|s| s.items().iter().enumerate().map(|(i, item)| (i, item.state)).collect::<Vec<_>>())
                                .unwrap_or_default()
                        })
                        key=|(i, state)| (*i, *state)
                        children=move |(index, state)| {
                            let is_current = move || session.with(|s| s.as_ref().is_some_and(|s| s.current_index() == index));
                            view! {
                                <button
                                    class=move || format!(
                                        "session-navigator__chip session-navigator__chip--{}{}",
                                        state.css_modifier(),
                                        if is_current() { " session-navigator__chip--current" } else { "" }
                                    )
                                    title=state.label()
                                    on:click=move |_| navigate_to(Navigation::Jump(index))
                                >
                                    {index + 1}
                                </button>
                            }
                        }
                    />
                </div>

                {move || session.with(|s| s.as_ref().and_then(|s| s.current()).map(|item| {
                    let source_words = item.paragraph.computed_word_count();
                    let state_class = format!("session-state session-state--{}", item.state.css_modifier());
                    view! {
                        <div class="session-item">
                            <div class="session-item__meta">
                                <span>{format!("#{} · {}", item.paragraph.position, item.paragraph.paragraph_type.as_str())}</span>
                                <span class=state_class>{item.state.label()}</span>
                            </div>
                            <div class="session-item__source" dir="auto">
                                {item.paragraph.original_text.clone()}
                            </div>
                            <div class="session-item__counts">
                                {format!("Source: {} words · Translation: {} words", source_words, item.word_count())}
                            </div>
                        </div>
                    }
                }))}

                <Textarea
                    id="translation-text"
                    value=current_text
                    on_input=on_text
                    placeholder="Type the translation..."
                    rows=8
                    dir="auto"
                    disabled=current_locked
                />

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| navigate_to(Navigation::Previous)
                    >
                        {icon("chevron-left")}
                        " Previous"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| navigate_to(Navigation::Next)
                    >
                        " Next "
                        {icon("chevron-right")}
                    </Button>
                </Flex>
            </div>
        </PageFrame>
    }
}

/// Copies a value read from `source` into `target`.
/// Returns `false` without touching anything when either is disposed.
fn sync_from<C: 'static, T: Send + Sync + 'static>(
    source: StoredValue<C, LocalStorage>,
    target: RwSignal<T>,
    read: impl FnOnce(&C) -> T,
) -> bool {
    match source.try_with_value(read) {
        Some(value) => target.try_set(value).is_none(),
        None => false,
    }
}

#[derive(Clone, Copy)]
enum Navigation {
    Previous,
    Next,
    Jump(usize),
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_sync_from_is_noop_after_unmount() {
        let owner = Owner::new();
        let (source, target) = owner.with(|| {
            (
                StoredValue::new_local(Rc::new(RefCell::new(3_u32))),
                RwSignal::new(0_u32),
            )
        });

        assert!(sync_from(source, target, |v| *v.borrow()));
        assert_eq!(target.get_untracked(), 3);

        owner.cleanup();
        assert!(!sync_from(source, target, |v| *v.borrow()));
    }
}
