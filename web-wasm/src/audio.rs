//! BGM再生（HtmlAudioElement）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

pub struct BgmPlayer {
    element: HtmlAudioElement,
    _on_ended: Closure<dyn FnMut()>,
}

impl BgmPlayer {
    /// audio要素を生成し、再生終了時のハンドラを登録
    pub fn new(on_ended: impl FnMut() + 'static) -> Result<Self, String> {
        let element = HtmlAudioElement::new().map_err(|e| format!("audio要素の生成に失敗: {:?}", e))?;

        let on_ended = Closure::wrap(Box::new(on_ended) as Box<dyn FnMut()>);
        element
            .add_event_listener_with_callback("ended", on_ended.as_ref().unchecked_ref())
            .map_err(|e| format!("endedハンドラの登録に失敗: {:?}", e))?;

        Ok(Self {
            element,
            _on_ended: on_ended,
        })
    }

    pub fn load(&self, url: &str) {
        self.element.set_src(url);
    }

    /// 再生開始（自動再生ポリシーで拒否された場合はErr）
    pub async fn play(element: HtmlAudioElement) -> Result<(), String> {
        let promise = element.play().map_err(|e| format!("{:?}", e))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }

    pub fn element(&self) -> HtmlAudioElement {
        self.element.clone()
    }
}
