use crate::routes::routes::AppRoutes;
use crate::shared::page_data::BookingData;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Salon settings and open slots embedded by the host page
    provide_context(BookingData::from_document());

    view! {
        <AppRoutes />
    }
}
