//! Schedule Settings
//!
//! Per-weekday opening configuration used by the scheduling forms.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::attendance::AttendanceKind;

/// Opening hours and capacity for one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSettings {
    pub id: i64,
    /// Weekday index, 0 = Sunday
    pub weekday: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Maximum attendances accepted per lane on this weekday
    pub max_per_day: u32,
    /// Lanes open on this weekday
    pub kinds: Vec<AttendanceKind>,
}

impl ScheduleSettings {
    /// Whether this weekday accepts bookings for the given lane
    pub fn allows(&self, kind: AttendanceKind) -> bool {
        self.kinds.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_only_configured_lanes() {
        let settings = ScheduleSettings {
            id: 1,
            weekday: 3,
            start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            max_per_day: 40,
            kinds: vec![AttendanceKind::Spiritual, AttendanceKind::LightBath],
        };
        assert!(settings.allows(AttendanceKind::Spiritual));
        assert!(!settings.allows(AttendanceKind::Rod));
    }
}
