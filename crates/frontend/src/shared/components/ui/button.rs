use leptos::prelude::*;

/// Submit control for a form: `<input type="submit">`
#[component]
pub fn SubmitButton(
    /// Caption shown on the button
    #[prop(optional, into)]
    value: MaybeProp<String>,
) -> impl IntoView {
    let caption = move || value.get().unwrap_or_else(|| "Add".to_string());

    view! {
        <input
            type="submit"
            class="button button--primary"
            value=caption
        />
    }
}
