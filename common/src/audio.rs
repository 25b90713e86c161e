//! BGMプレイヤー制御
//!
//! 再生リストと現在のトラック位置を保持し、audio要素への操作を
//! `AudioCommand` として返す。実際の再生はホスト側（Web）が行う。

use crate::types::Track;

/// audio要素への操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCommand {
    /// `src` を設定（再生はしない）
    Load { url: String },
    /// `play()` を呼ぶ
    Play,
}

/// 再生リスト制御
#[derive(Debug, Clone, Default)]
pub struct AudioController {
    playlist: Vec<Track>,
    current: usize,
    started: bool,
}

impl AudioController {
    pub fn new(playlist: Vec<Track>) -> Self {
        Self {
            playlist,
            current: 0,
            started: false,
        }
    }

    /// 組み込みの再生リスト
    pub fn builtin_playlist() -> Vec<Track> {
        vec![Track {
            title: "Autumn Leaves".into(),
            url: "music/autumn.mp3".into(),
        }]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.current)
    }

    /// ユーザー操作で再生開始済みか
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// 指定位置のトラックを読み込む
    ///
    /// 末尾を超えたら先頭へ、負なら末尾へ折り返す。
    pub fn load_song(&mut self, index: isize) -> Option<AudioCommand> {
        if self.playlist.is_empty() {
            return None;
        }

        let len = self.playlist.len();
        let index = if index < 0 {
            len - 1
        } else if index as usize >= len {
            0
        } else {
            index as usize
        };

        self.current = index;
        let track = &self.playlist[index];
        log::debug!("load track #{}: {}", index, track.title);
        Some(AudioCommand::Load {
            url: track.url.clone(),
        })
    }

    /// 起動時の先読み（再生はしない）
    pub fn preload(&mut self) -> Option<AudioCommand> {
        self.load_song(0)
    }

    /// 次のトラックを読み込んで再生
    pub fn next_song(&mut self) -> Vec<AudioCommand> {
        let next = self.current as isize + 1;
        match self.load_song(next) {
            Some(load) => vec![load, AudioCommand::Play],
            None => Vec::new(),
        }
    }

    /// トラック終了時: 自動で次へ
    pub fn on_ended(&mut self) -> Vec<AudioCommand> {
        self.next_song()
    }

    /// 初回ユーザー操作: 先頭から再生
    pub fn start(&mut self) -> Vec<AudioCommand> {
        match self.load_song(0) {
            Some(load) => {
                self.started = true;
                vec![load, AudioCommand::Play]
            }
            None => Vec::new(),
        }
    }
}
