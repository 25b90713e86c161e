//! マーカー・地域の共通カラーパレット

/// 虹色パレット（カタログ順に巡回）
pub const MARKER_COLORS: [&str; 12] = [
    "#FF6B6B", // Red
    "#4ECDC4", // Teal
    "#45B7D1", // Light Blue
    "#96CEB4", // Greenish
    "#FFEEAD", // Yellow
    "#D4A5A5", // Pink
    "#9B59B6", // Purple
    "#3498DB", // Blue
    "#E67E22", // Orange
    "#2ECC71", // Green
    "#F1C40F", // Yellow
    "#E74C3C", // Red
];

/// カタログ内インデックスに対応する色
pub fn color_for_index(index: usize) -> &'static str {
    MARKER_COLORS[index % MARKER_COLORS.len()]
}
