//! 詳細パネルコンポーネント

use leptos::prelude::*;
use travel_diary_common::TripDetails;

#[component]
pub fn DetailsPanel<F>(details: ReadSignal<Option<TripDetails>>, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let field = move |f: fn(&TripDetails) -> String| {
        move || details.with(|d| d.as_ref().map(f).unwrap_or_default())
    };

    view! {
        <div id="location-details" class="location-details">
            <button
                class="close-btn"
                title="关闭"
                on:click={
                    let on_close = on_close.clone();
                    move |_| on_close(())
                }
            >
                "×"
            </button>
            <img id="detail-photo" class="detail-photo" src=field(|d| d.photo_src.clone()) alt="" />
            <h2 id="detail-name">{field(|d| d.name.clone())}</h2>
            <p id="detail-date" class="detail-date">{field(|d| d.date.clone())}</p>
            <p id="detail-desc" class="detail-desc">{field(|d| d.description.clone())}</p>
        </div>
    }
}
