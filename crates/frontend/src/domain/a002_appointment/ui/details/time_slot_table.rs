use crate::shared::components::ui::Radio;
use contracts::domain::a002_appointment::aggregate::AppointmentField;
use contracts::shared::time_slots::{format_timestamp, SlotCell, Timestamp, TimeSlotGrid};
use leptos::prelude::*;

/// Weekly table of half-hour slots.
///
/// Rows are times of day, columns are dates. A cell holds a radio button only
/// when the slot it stands for is available.
#[component]
pub fn TimeSlotTable(
    grid: TimeSlotGrid,
    /// Currently selected slot
    #[prop(into)]
    checked: Signal<Option<Timestamp>>,
    /// Receives the radio's raw value
    on_change: Callback<String>,
) -> impl IntoView {
    let headers = grid.header_labels();
    let checked_value = Signal::derive(move || checked.get().map(format_timestamp).unwrap_or_default());

    let slot_cell = move |cell: SlotCell| {
        view! {
            <td>
                {cell.available.then(|| view! {
                    <Radio
                        name=AppointmentField::StartsAt.name()
                        value=format_timestamp(cell.starts_at)
                        checked_value=checked_value
                        on_change=on_change
                    />
                })}
            </td>
        }
    };

    view! {
        <table id="time-slots" class="time-slots">
            <thead>
                <tr>
                    <th></th>
                    {headers.into_iter().map(|label| view! { <th>{label}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {grid.rows.into_iter().map(|row| {
                    let label = row.label();
                    view! {
                        <tr>
                            <th>{label}</th>
                            {row.cells.into_iter().map(slot_cell).collect_view()}
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
