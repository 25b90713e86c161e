//! 外部データ取得

pub mod geometry;
