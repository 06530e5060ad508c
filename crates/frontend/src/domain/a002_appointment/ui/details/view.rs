use super::time_slot_table::TimeSlotTable;
use super::view_model::AppointmentDetailsViewModel;
use crate::shared::components::ui::{Select, SubmitButton};
use crate::shared::date_utils::now_local;
use contracts::domain::a002_appointment::aggregate::{
    AppointmentDto, AppointmentField, AvailableTimeSlot, SERVICE_LABEL,
};
use contracts::shared::salon_settings::SalonSettings;
use contracts::shared::time_slots::{TimeSlotGrid, Timestamp};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Service selection plus a week of bookable slots
#[component]
pub fn AppointmentForm(
    /// Services to choose from; the salon defaults when omitted
    #[prop(optional)]
    selectable_services: Option<Vec<String>>,
    /// Pre-selected service
    #[prop(optional, into)]
    service: String,
    /// Pre-selected slot
    #[prop(optional)]
    starts_at: Option<Timestamp>,
    /// Called with the submitted state once the server accepts it
    #[prop(optional)]
    on_submit: Option<Callback<AppointmentDto>>,
    #[prop(optional)]
    salon_opens_at: Option<u32>,
    #[prop(optional)]
    salon_closes_at: Option<u32>,
    /// First day shown in the grid; defaults to now
    #[prop(optional)]
    today: Option<Timestamp>,
    #[prop(optional)]
    available_time_slots: Vec<AvailableTimeSlot>,
) -> impl IntoView {
    let defaults = SalonSettings::default();
    let mut settings = defaults.clone().with_hours(
        salon_opens_at.unwrap_or(defaults.opens_at),
        salon_closes_at.unwrap_or(defaults.closes_at),
    );
    if let Some(services) = selectable_services {
        settings = settings.with_services(services);
    }

    let mut initial = AppointmentDto::new(service);
    if let Some(starts_at) = starts_at {
        initial = initial.with_starts_at(starts_at);
    }
    let vm = AppointmentDetailsViewModel::new(initial);

    let today = today.unwrap_or_else(now_local);
    let grid = TimeSlotGrid::build(&settings, today, &available_time_slots);
    let service_options: Vec<(String, String)> = settings
        .selectable_services
        .iter()
        .map(|s| (s.clone(), s.clone()))
        .collect();

    view! {
        <form
            id="appointment"
            class="details-form appointment-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                vm.save_command(on_submit);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Select
                label=SERVICE_LABEL.to_string()
                id=AppointmentField::Service.name().to_string()
                name=AppointmentField::Service.name().to_string()
                value=vm.selected_service()
                options=service_options
                blank_option=true
                on_change=Callback::new(move |value: String| {
                    vm.change_command(AppointmentField::Service, value)
                })
            />

            <TimeSlotTable
                grid=grid
                checked=vm.checked_slot()
                on_change=Callback::new(move |value: String| {
                    vm.change_command(AppointmentField::StartsAt, value)
                })
            />

            <SubmitButton value="Add".to_string() />
        </form>
    }
}
