// ABOUTME: Injectable wall-clock abstraction and morning/evening day-period classification
// ABOUTME: SystemClock reads the real clock, FixedClock pins time for deterministic tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use fitstreak_core::models::{PlanCategory, TimePreference};
use serde::{Deserialize, Serialize};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current instant
    fn utc_now(&self) -> DateTime<Utc>;

    /// Current local wall-clock time
    fn local_now(&self) -> NaiveDateTime;

    /// Current local hour (0-23)
    fn local_hour(&self) -> u32 {
        self.local_now().hour()
    }

    /// Current local calendar day
    fn today(&self) -> NaiveDate {
        self.local_now().date()
    }
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given local time; the same value is reported as UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    local: NaiveDateTime,
}

impl FixedClock {
    /// Freeze the clock at `local`
    #[must_use]
    pub const fn new(local: NaiveDateTime) -> Self {
        Self { local }
    }

    /// Freeze the clock at `hour:00` on `date`, clamping the hour to 23
    #[must_use]
    pub fn at_hour(date: NaiveDate, hour: u32) -> Self {
        let local = date
            .and_hms_opt(hour.min(23), 0, 0)
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
        Self { local }
    }
}

impl Clock for FixedClock {
    fn utc_now(&self) -> DateTime<Utc> {
        self.local.and_utc()
    }

    fn local_now(&self) -> NaiveDateTime {
        self.local
    }
}

/// Morning or evening context derived from the local hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPeriod {
    /// Before the afternoon start hour
    Morning,
    /// At or after the afternoon start hour
    Evening,
}

impl DayPeriod {
    /// Classify `hour`; hours before `afternoon_start_hour` are morning
    #[must_use]
    pub const fn from_hour(hour: u32, afternoon_start_hour: u32) -> Self {
        if hour < afternoon_start_hour {
            Self::Morning
        } else {
            Self::Evening
        }
    }

    /// Plan time preference this period corresponds to
    #[must_use]
    pub const fn time_preference(self) -> TimePreference {
        match self {
            Self::Morning => TimePreference::Am,
            Self::Evening => TimePreference::Pm,
        }
    }

    /// Whether a plan with `preference` suits this period
    #[must_use]
    pub fn accepts(self, preference: TimePreference) -> bool {
        preference == TimePreference::Anytime || preference == self.time_preference()
    }

    /// Capitalized label used in suggestion reasons
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
        }
    }

    /// Categories tried, in order, by the time-of-day fallback
    #[must_use]
    pub const fn preferred_categories(self) -> [PlanCategory; 2] {
        match self {
            Self::Morning => [PlanCategory::Cardio, PlanCategory::Mobility],
            Self::Evening => [PlanCategory::Strength, PlanCategory::Mobility],
        }
    }
}
