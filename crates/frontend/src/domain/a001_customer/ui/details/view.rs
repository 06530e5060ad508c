use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::ui::{Input, SubmitButton};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerField};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn CustomerForm(
    #[prop(optional, into)] first_name: String,
    #[prop(optional, into)] last_name: String,
    #[prop(optional, into)] phone_number: String,
    /// Called with the saved customer once the server accepts it
    #[prop(optional)]
    on_save: Option<Callback<Customer>>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(CustomerDto::new(first_name, last_name, phone_number));

    view! {
        <form
            id="customer"
            class="details-form customer-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                vm.save_command(on_save);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            {CustomerField::ALL
                .into_iter()
                .map(|field| view! {
                    <Input
                        label=field.label().to_string()
                        id=field.name().to_string()
                        name=field.name().to_string()
                        value=vm.field_value(field)
                        on_input=Callback::new(move |value: String| vm.change_command(field, value))
                    />
                })
                .collect_view()}

            <SubmitButton value="Add".to_string() />
        </form>
    }
}
