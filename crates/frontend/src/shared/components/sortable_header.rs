//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Position"
//!     sort_field="position"
//!     current_sort_field=Signal::derive(move || list.with(|c| c.filter_state().sort_key.clone().unwrap_or_default()))
//!     sort_ascending=Signal::derive(move || list.with(|c| c.filter_state().sort_direction.is_ascending()))
//!     on_sort=Callback::new(move |field: String| list.update(|c| c.set_sort(&field, SortDirection::Ascending)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
