use crate::domain::a001_customer::ui::details::CustomerForm;
use crate::domain::a002_appointment::ui::details::AppointmentForm;
use crate::shared::page_data::BookingData;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_appointment::aggregate::AppointmentDto;
use contracts::shared::time_slots::format_timestamp;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Client-side page paths; kept apart from the POST endpoints on the same origin
pub const CUSTOMER_PAGE_PATH: &str = "/";
pub const APPOINTMENT_PAGE_PATH: &str = "/appointments/new";

#[component]
fn CustomerPage() -> impl IntoView {
    let (saved, set_saved) = signal(None::<String>);

    let on_save = Callback::new(move |customer: Customer| {
        log::info!("Customer saved: {:?}", customer.id);
        set_saved.set(Some(format!(
            "Saved {} {}",
            customer.fields.first_name, customer.fields.last_name
        )));
    });

    view! {
        <section class="page page--customer">
            <h2>"New customer"</h2>
            {move || saved.get().map(|msg| view! { <div class="notice">{msg}</div> })}
            <CustomerForm on_save=on_save />
        </section>
    }
}

#[component]
fn AppointmentPage() -> impl IntoView {
    let data = use_context::<BookingData>().unwrap_or_default();
    let (booked, set_booked) = signal(None::<String>);

    let on_submit = Callback::new(move |appointment: AppointmentDto| {
        let when = appointment
            .starts_at
            .map(format_timestamp)
            .unwrap_or_else(|| "no time".to_string());
        log::info!("Appointment booked: {} at {}", appointment.service, when);
        set_booked.set(Some(format!("Booked {} at {}", appointment.service, when)));
    });

    view! {
        <section class="page page--appointment">
            <h2>"New appointment"</h2>
            {move || booked.get().map(|msg| view! { <div class="notice">{msg}</div> })}
            <AppointmentForm
                selectable_services=data.settings.selectable_services
                salon_opens_at=data.settings.opens_at
                salon_closes_at=data.settings.closes_at
                available_time_slots=data.available_time_slots
                on_submit=on_submit
            />
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <nav class="navbar">
                <A href=CUSTOMER_PAGE_PATH>"Customers"</A>
                <A href=APPOINTMENT_PAGE_PATH>"Appointments"</A>
            </nav>
            <main class="content">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=CustomerPage />
                    <Route path=path!("/appointments/new") view=AppointmentPage />
                </Routes>
            </main>
        </Router>
    }
}
