//! 旅行一覧コンポーネント

use leptos::prelude::*;
use travel_diary_common::TripListEntry;

#[component]
pub fn TripList<F>(trips: ReadSignal<Vec<TripListEntry>>, on_select: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="placeholder" class="placeholder">
            <div class="travel-list-group">
                <For
                    each=move || trips.get()
                    key=|entry| entry.trip_id
                    children=move |entry| {
                        let on_select = on_select.clone();
                        let trip_id = entry.trip_id;
                        view! {
                            <div class="travel-item" on:click=move |_| on_select(trip_id)>
                                <div class="travel-item-name">{entry.name}</div>
                                <div class="travel-item-date">
                                    <i class="far fa-calendar-alt"></i>
                                    " "
                                    {entry.date}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
