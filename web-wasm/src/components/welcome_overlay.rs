//! ウェルカム画面コンポーネント

use leptos::prelude::*;

/// クリックでBGM再生を開始する（自動再生ポリシー対策）
#[component]
pub fn WelcomeOverlay<F>(on_enter: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div
            id="welcome-overlay"
            class="welcome-overlay"
            on:click={
                let on_enter = on_enter.clone();
                move |_| on_enter(())
            }
        >
            <div class="welcome-content">
                <h1>"欢迎来到我的旅行日记"</h1>
                <p>"点击任意处开始"</p>
            </div>
        </div>
    }
}
