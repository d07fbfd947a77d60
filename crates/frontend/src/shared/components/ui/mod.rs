pub mod label_badge;
pub mod select;
pub mod textarea;

pub use label_badge::LabelBadge;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// `<label>` for a form control, rendered only when text is given
#[component]
fn FieldLabel(label: MaybeProp<String>, target: Signal<String>) -> impl IntoView {
    move || {
        label.get().map(|text| {
            view! { <label class="form__label" for=move || target.get()>{text}</label> }
        })
    }
}
