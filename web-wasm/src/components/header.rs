//! ヘッダーコンポーネント

use leptos::prelude::*;
use travel_diary_common::{Mode, TripListEntry};

#[component]
pub fn Header<F>(
    mode: ReadSignal<Mode>,
    trips: ReadSignal<Vec<TripListEntry>>,
    on_select_mode: F,
) -> impl IntoView
where
    F: Fn(Mode) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1>"我的旅行日记"</h1>

            <div class="mode-switch">
                <button
                    id="btn-intl"
                    class="mode-btn"
                    class:active=move || mode.get() == Mode::Intl
                    on:click={
                        let on_select_mode = on_select_mode.clone();
                        move |_| on_select_mode(Mode::Intl)
                    }
                >
                    "国际"
                </button>
                <button
                    id="btn-domestic"
                    class="mode-btn"
                    class:active=move || mode.get() == Mode::Domestic
                    on:click={
                        let on_select_mode = on_select_mode.clone();
                        move |_| on_select_mode(Mode::Domestic)
                    }
                >
                    "国内"
                </button>
            </div>

            <p class="stats">
                "已打卡 "
                <span id="location-count">{move || trips.get().len()}</span>
                " 个地点"
            </p>
        </header>
    }
}
