// ABOUTME: Groups recent pain reports by body area and flags areas needing mobility work
// ABOUTME: Preserves the order in which areas first appear in the report list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PainThresholds;
use fitstreak_core::models::PainReport;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated pain reports for one body area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainAreaSummary {
    /// Area label exactly as reported
    pub area: String,
    /// Number of reports in the window
    pub report_count: usize,
    /// Highest severity reported
    pub max_level: u8,
}

impl PainAreaSummary {
    /// Whether this area crosses the painful-area thresholds
    #[must_use]
    pub const fn is_painful(&self, thresholds: &PainThresholds) -> bool {
        self.report_count >= thresholds.min_reports && self.max_level >= thresholds.min_level
    }
}

/// Summarize reports per area, in first-seen order
///
/// Areas are grouped by their exact label.
#[must_use]
pub fn summarize_by_area(reports: &[PainReport]) -> Vec<PainAreaSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<PainAreaSummary> = Vec::new();

    for report in reports {
        if let Some(&position) = index.get(report.area.as_str()) {
            let summary = &mut summaries[position];
            summary.report_count += 1;
            summary.max_level = summary.max_level.max(report.level);
        } else {
            index.insert(report.area.as_str(), summaries.len());
            summaries.push(PainAreaSummary {
                area: report.area.clone(),
                report_count: 1,
                max_level: report.level,
            });
        }
    }

    summaries
}

/// Areas with enough reports, one of them severe enough, in first-seen order
#[must_use]
pub fn painful_areas(reports: &[PainReport], thresholds: &PainThresholds) -> Vec<String> {
    summarize_by_area(reports)
        .into_iter()
        .filter(|summary| summary.is_painful(thresholds))
        .map(|summary| summary.area)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(area: &str, level: u8, day: u32) -> PainReport {
        PainReport {
            area: area.to_owned(),
            level,
            date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
        }
    }

    #[test]
    fn test_three_reports_with_one_severe_is_painful() {
        let reports = vec![report("hip", 1, 9), report("hip", 2, 10), report("hip", 3, 11)];
        let areas = painful_areas(&reports, &PainThresholds::default());
        assert_eq!(areas, vec!["hip"]);
    }

    #[test]
    fn test_mild_reports_are_not_painful() {
        let reports = vec![report("knee", 2, 9), report("knee", 2, 10), report("knee", 1, 11)];
        assert!(painful_areas(&reports, &PainThresholds::default()).is_empty());
    }

    #[test]
    fn test_two_severe_reports_are_not_enough() {
        let reports = vec![report("back", 9, 10), report("back", 8, 11)];
        assert!(painful_areas(&reports, &PainThresholds::default()).is_empty());
    }

    #[test]
    fn test_areas_keep_first_seen_order() {
        let reports = vec![
            report("shoulder", 4, 5),
            report("hip", 6, 5),
            report("hip", 6, 6),
            report("shoulder", 4, 6),
            report("hip", 6, 7),
            report("shoulder", 4, 7),
        ];

        let areas = painful_areas(&reports, &PainThresholds::default());
        assert_eq!(areas, vec!["shoulder", "hip"]);

        let summaries = summarize_by_area(&reports);
        assert_eq!(summaries[1].area, "hip");
        assert_eq!(summaries[1].report_count, 3);
        assert_eq!(summaries[1].max_level, 6);
    }

    #[test]
    fn test_labels_are_grouped_exactly() {
        let reports = vec![report("Hip", 5, 9), report("hip", 5, 10), report("hip", 5, 11)];
        assert!(painful_areas(&reports, &PainThresholds::default()).is_empty());
    }
}
