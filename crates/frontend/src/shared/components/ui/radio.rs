use leptos::prelude::*;

/// Radio button component
#[component]
pub fn Radio(
    /// Radio value
    #[prop(into)]
    value: String,
    /// Current selected value
    #[prop(into)]
    checked_value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let radio_id = format!("{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let is_checked = move || checked_value.get() == value_for_check;

    view! {
        <input
            id=radio_id
            type="radio"
            class="form__radio"
            name=name
            value=value
            prop:checked=is_checked
            on:change=move |_| {
                if let Some(handler) = on_change {
                    handler.run(value_for_change.clone());
                }
            }
        />
    }
}
