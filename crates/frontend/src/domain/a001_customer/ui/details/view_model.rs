use super::model;
use crate::shared::api_utils::{ApiError, SAVE_ERROR_MESSAGE};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerField};
use contracts::shared::submission::SubmitRequest;
use leptos::prelude::*;

/// ViewModel for the customer form
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
}

impl CustomerDetailsViewModel {
    pub fn new(initial: CustomerDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
        }
    }

    pub fn field_value(&self, field: CustomerField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    }

    pub fn change_command(&self, field: CustomerField, value: String) {
        self.form.update(|f| f.apply_change(field, &value));
    }

    pub fn submit_request(&self) -> serde_json::Result<SubmitRequest> {
        self.form.with_untracked(|f| f.submit_request())
    }

    /// Clear the error flag and take the state to submit
    pub fn begin_save(&self) -> CustomerDto {
        self.error.set(None);
        self.form.get_untracked()
    }

    /// Set the error flag on failure; on success return what `on_save` gets
    pub fn finish_save(&self, result: Result<Customer, ApiError>) -> Option<Customer> {
        match result {
            Ok(customer) => Some(customer),
            Err(e) => {
                log::error!("Failed to save customer: {}", e);
                self.error.set(Some(SAVE_ERROR_MESSAGE.to_string()));
                None
            }
        }
    }

    /// Post the current state once; `on_save` receives the saved customer
    pub fn save_command(&self, on_save: Option<Callback<Customer>>) {
        let current = self.begin_save();
        let vm = *self;

        log::debug!("Submitting customer");
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await;
            if let Some(customer) = vm.finish_save(result) {
                if let Some(callback) = on_save {
                    callback.run(customer);
                }
            }
        });
    }
}
