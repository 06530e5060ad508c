use super::model;
use crate::shared::api_utils::{ApiError, SAVE_ERROR_MESSAGE};
use contracts::domain::a002_appointment::aggregate::{AppointmentDto, AppointmentField};
use contracts::shared::submission::SubmitRequest;
use contracts::shared::time_slots::Timestamp;
use leptos::prelude::*;

/// ViewModel for the appointment form
#[derive(Clone, Copy)]
pub struct AppointmentDetailsViewModel {
    pub form: RwSignal<AppointmentDto>,
    pub error: RwSignal<Option<String>>,
}

impl AppointmentDetailsViewModel {
    pub fn new(initial: AppointmentDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
        }
    }

    pub fn selected_service(&self) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.service.clone()))
    }

    pub fn checked_slot(&self) -> Signal<Option<Timestamp>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.starts_at))
    }

    /// Merge a control's new value into the form state
    pub fn change_command(&self, field: AppointmentField, value: String) {
        self.form.update(|f| f.apply_change(field, &value));
    }

    /// Request that the next submission would send
    pub fn submit_request(&self) -> serde_json::Result<SubmitRequest> {
        self.form.with_untracked(|f| f.submit_request())
    }

    /// Clear the error flag and take the state to submit
    pub fn begin_save(&self) -> AppointmentDto {
        self.error.set(None);
        self.form.get_untracked()
    }

    /// Set the error flag on failure; on success return what `on_submit` gets
    pub fn finish_save(&self, result: Result<AppointmentDto, ApiError>) -> Option<AppointmentDto> {
        match result {
            Ok(appointment) => Some(appointment),
            Err(e) => {
                log::error!("Failed to save appointment: {}", e);
                self.error.set(Some(SAVE_ERROR_MESSAGE.to_string()));
                None
            }
        }
    }

    /// Post the current state once; `on_submit` receives it on success
    pub fn save_command(&self, on_submit: Option<Callback<AppointmentDto>>) {
        let current = self.begin_save();
        let vm = *self;

        log::debug!("Submitting appointment for service '{}'", current.service);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&current).await.map(|()| current);
            if let Some(appointment) = vm.finish_save(result) {
                if let Some(callback) = on_submit {
                    callback.run(appointment);
                }
            }
        });
    }
}
