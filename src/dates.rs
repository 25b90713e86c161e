//! 旅行期間のパース
//!
//! カタログの期間は "2025-10-12 -- 2025-10-24" 形式の文字列。

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 旅行期間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// 期間文字列をパース（単日表記も可）
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split("--").map(str::trim);
        let start = NaiveDate::parse_from_str(parts.next()?, DATE_FORMAT).ok()?;
        let end = match parts.next() {
            Some(end) => NaiveDate::parse_from_str(end, DATE_FORMAT).ok()?,
            None => start,
        };
        if parts.next().is_some() || end < start {
            return None;
        }
        Some(Self { start, end })
    }

    /// 日数（両端を含む）
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2025-10-12 -- 2025-10-24").unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 10, 12).unwrap());
        assert_eq!(range.days(), 13);
    }

    #[test]
    fn test_parse_single_day() {
        let range = DateRange::parse("2025-08-10").unwrap();
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateRange::parse("").is_none());
        assert!(DateRange::parse("2025-13-01 -- 2025-13-02").is_none());
        assert!(DateRange::parse("2025-10-24 -- 2025-10-12").is_none());
        assert!(DateRange::parse("2025-10-01 -- 2025-10-02 -- 2025-10-03").is_none());
    }
}
