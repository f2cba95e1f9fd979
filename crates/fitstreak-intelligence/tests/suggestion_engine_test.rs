// ABOUTME: Integration tests for the workout suggestion engine rule cascade
// ABOUTME: Covers miss streak, pain, progression, duration filter, limits and determinism
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fitstreak_core::models::{
    AdherenceStats, MicroPlan, PainReport, PlanCategory, TimePreference, WorkoutSuggestion,
};
use fitstreak_intelligence::{
    generate_suggestions, FixedClock, SuggestionEngine, SuggestionEngineConfig, SuggestionRequest,
};

const MORNING: u32 = 9;
const EVENING: u32 = 19;

fn micro_plan(
    id: &str,
    name: &str,
    duration: u32,
    category: PlanCategory,
    time_preference: TimePreference,
    cues: &[&str],
) -> MicroPlan {
    MicroPlan {
        id: id.to_owned(),
        name: name.to_owned(),
        duration,
        category,
        time_preference,
        progression_level: 1,
        cues: cues.iter().map(|c| (*c).to_owned()).collect(),
    }
}

fn mock_plans() -> Vec<MicroPlan> {
    vec![
        micro_plan(
            "1",
            "Quick Morning Wake-up",
            5,
            PlanCategory::Cardio,
            TimePreference::Am,
            &["Jump", "Run"],
        ),
        micro_plan(
            "2",
            "Core Foundation",
            10,
            PlanCategory::Strength,
            TimePreference::Pm,
            &["Plank", "Bridge"],
        ),
        micro_plan(
            "3",
            "Hip Mobility",
            10,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Stretch", "Rotate"],
        ),
        micro_plan(
            "4",
            "Cardio Challenge",
            20,
            PlanCategory::Cardio,
            TimePreference::Am,
            &["Sprint", "Jump"],
        ),
    ]
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
}

fn stats(complete_streak: u32, miss_streak: u32, last: Option<NaiveDate>) -> AdherenceStats {
    AdherenceStats {
        complete_streak,
        miss_streak,
        last_activity_date: last,
        total_active_minutes: 0,
    }
}

fn hip_pain() -> Vec<PainReport> {
    [(5, 11), (4, 10), (3, 9)]
        .into_iter()
        .map(|(level, day)| PainReport {
            area: "hip".to_owned(),
            level,
            date: date(day),
        })
        .collect()
}

#[test]
fn test_miss_streak_suggests_quick_win_first() {
    let plans = mock_plans();
    let user_stats = stats(0, 2, None);
    let request = SuggestionRequest::new(&plans).with_stats(Some(&user_stats));

    let suggestions = generate_suggestions(&request, MORNING);

    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 2);
    assert_eq!(suggestions[0].plan_id, "1");
    assert_eq!(suggestions[0].duration, 5);
    assert!(suggestions[0].reason.contains("miss streak"));
    assert_eq!(
        suggestions[0].reason,
        "Quick 5-min win to break the 2-day miss streak!"
    );
}

#[test]
fn test_miss_streak_falls_back_to_off_period_quick_win() {
    // The only 5 minute plan is a morning plan, but it is evening
    let plans = mock_plans();
    let user_stats = stats(0, 4, None);
    let request = SuggestionRequest::new(&plans).with_stats(Some(&user_stats));

    let suggestions = generate_suggestions(&request, EVENING);

    assert_eq!(suggestions[0].plan_id, "1");
    assert!(suggestions[0].reason.contains("4-day miss streak"));
}

#[test]
fn test_pain_suggests_mobility_plan() {
    let plans = mock_plans();
    let pain = hip_pain();
    let request = SuggestionRequest::new(&plans).with_pain(&pain);

    let suggestions = generate_suggestions(&request, MORNING);

    let mobility = suggestions
        .iter()
        .find(|s| s.category == PlanCategory::Mobility)
        .expect("mobility suggestion");
    assert_eq!(mobility.plan_id, "3");
    assert_eq!(mobility.reason, "Mobility work to address hip discomfort");
}

#[test]
fn test_pain_below_threshold_is_ignored() {
    let plans = mock_plans();
    let pain: Vec<PainReport> = hip_pain().into_iter().take(2).collect();
    let request = SuggestionRequest::new(&plans).with_pain(&pain);

    let suggestions = generate_suggestions(&request, MORNING);

    assert!(suggestions.iter().all(|s| !s.reason.contains("discomfort")));
}

/// Three level-4 reports for each area, newest day first, areas interleaved
fn pain_reports(areas: &[&str]) -> Vec<PainReport> {
    [11, 10, 9]
        .into_iter()
        .flat_map(|day| {
            areas.iter().map(move |area| PainReport {
                area: (*area).to_owned(),
                level: 4,
                date: date(day),
            })
        })
        .collect()
}

fn picked(suggestions: &[WorkoutSuggestion]) -> Vec<(&str, &str)> {
    suggestions
        .iter()
        .map(|s| (s.plan_id.as_str(), s.reason.as_str()))
        .collect()
}

fn wake_up_cardio() -> MicroPlan {
    micro_plan(
        "c5",
        "Wake-up Cardio",
        5,
        PlanCategory::Cardio,
        TimePreference::Am,
        &["Jog"],
    )
}

#[test]
fn test_pain_without_name_match_uses_first_mobility_plan_for_period() {
    let plans = vec![
        micro_plan(
            "m5",
            "Neck Release",
            5,
            PlanCategory::Mobility,
            TimePreference::Pm,
            &["Tilt"],
        ),
        micro_plan(
            "m10",
            "Ankle Circles",
            10,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Circle"],
        ),
        wake_up_cardio(),
    ];
    let pain = pain_reports(&["hip"]);
    let request = SuggestionRequest::new(&plans).with_pain(&pain);

    let suggestions = generate_suggestions(&request, MORNING);

    assert_eq!(
        picked(&suggestions),
        vec![
            ("m10", "Mobility work to address hip discomfort"),
            ("c5", "Morning cardio routine"),
        ]
    );
}

#[test]
fn test_pain_skips_name_matched_plan_outside_period() {
    let plans = vec![
        micro_plan(
            "hip-pm",
            "Evening Hip Flow",
            10,
            PlanCategory::Mobility,
            TimePreference::Pm,
            &["Lunge"],
        ),
        micro_plan(
            "gen",
            "General Mobility",
            10,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Reach"],
        ),
        wake_up_cardio(),
    ];
    let pain = pain_reports(&["hip"]);
    let request = SuggestionRequest::new(&plans).with_pain(&pain);

    let suggestions = generate_suggestions(&request, MORNING);

    assert_eq!(
        picked(&suggestions),
        vec![
            ("gen", "Mobility work to address hip discomfort"),
            ("c5", "Morning cardio routine"),
        ]
    );
}

#[test]
fn test_pain_rule_adds_nothing_when_its_plan_is_the_quick_win() {
    let plans = vec![
        micro_plan(
            "m5",
            "Hip Opener",
            5,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Open"],
        ),
        micro_plan(
            "m10",
            "Morning Stretch",
            10,
            PlanCategory::Mobility,
            TimePreference::Am,
            &["Stretch"],
        ),
    ];
    let user_stats = stats(0, 2, None);
    let pain = pain_reports(&["hip"]);
    let request = SuggestionRequest::new(&plans)
        .with_stats(Some(&user_stats))
        .with_pain(&pain);

    let suggestions = generate_suggestions(&request, MORNING);

    assert_eq!(
        picked(&suggestions),
        vec![
            ("m5", "Quick 5-min win to break the 2-day miss streak!"),
            ("m10", "Morning mobility routine"),
        ]
    );
}

#[test]
fn test_pain_area_matches_plan_name_ignoring_case() {
    let plans = vec![
        micro_plan(
            "gen",
            "Full Mobility",
            10,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Reach"],
        ),
        micro_plan(
            "hip",
            "Hip Flow",
            10,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Lunge"],
        ),
        wake_up_cardio(),
    ];
    let pain = pain_reports(&["HIP"]);
    let request = SuggestionRequest::new(&plans).with_pain(&pain);

    let suggestions = generate_suggestions(&request, MORNING);

    assert_eq!(
        picked(&suggestions),
        vec![
            ("hip", "Mobility work to address HIP discomfort"),
            ("c5", "Morning cardio routine"),
        ]
    );
}

#[test]
fn test_pain_targets_first_reported_painful_area() {
    let plans = vec![
        micro_plan(
            "hip",
            "Hip Flow",
            10,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Lunge"],
        ),
        micro_plan(
            "knee",
            "Knee Care",
            10,
            PlanCategory::Mobility,
            TimePreference::Anytime,
            &["Bend"],
        ),
        wake_up_cardio(),
    ];
    let pain = pain_reports(&["knee", "hip"]);
    let request = SuggestionRequest::new(&plans).with_pain(&pain);

    let suggestions = generate_suggestions(&request, MORNING);

    assert_eq!(
        picked(&suggestions),
        vec![
            ("knee", "Mobility work to address knee discomfort"),
            ("c5", "Morning cardio routine"),
        ]
    );
}

#[test]
fn test_complete_streak_suggests_progression() {
    let plans = mock_plans();
    let user_stats = stats(3, 0, Some(date(10)));
    let request = SuggestionRequest::new(&plans).with_stats(Some(&user_stats));

    // Target is 10 + 5 = 15 minutes, add a matching plan
    let mut with_target = plans.clone();
    with_target.push(micro_plan(
        "5",
        "Full Body Builder",
        15,
        PlanCategory::Strength,
        TimePreference::Anytime,
        &["Squats"],
    ));
    let request_with_target = SuggestionRequest::new(&with_target).with_stats(Some(&user_stats));

    let suggestions = generate_suggestions(&request_with_target, MORNING);
    assert_eq!(suggestions[0].plan_id, "5");
    assert_eq!(suggestions[0].reason, "3-day streak! Ready for 15min challenge");

    // Without a 15 minute plan the progression rule yields nothing
    let suggestions = generate_suggestions(&request, MORNING);
    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| !s.reason.contains("challenge")));
}

#[test]
fn test_progression_uses_selected_duration() {
    let plans = mock_plans();
    let user_stats = stats(5, 0, Some(date(10)));
    let request = SuggestionRequest::new(&plans)
        .with_stats(Some(&user_stats))
        .with_duration(Some(20));

    let suggestions = generate_suggestions(&request, MORNING);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].plan_id, "4");
    assert!(suggestions[0].reason.contains("streak"));
}

#[test]
fn test_duration_filter_restricts_every_suggestion() {
    let plans = mock_plans();
    let request = SuggestionRequest::new(&plans).with_duration(Some(10));

    for hour in [MORNING, EVENING] {
        let suggestions = generate_suggestions(&request, hour);
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().all(|s| s.duration == 10));
    }
}

#[test]
fn test_unmatched_duration_yields_nothing() {
    let plans = mock_plans();
    let request = SuggestionRequest::new(&plans).with_duration(Some(15));
    assert!(generate_suggestions(&request, MORNING).is_empty());
}

#[test]
fn test_morning_prefers_cardio_then_mobility() {
    let plans = mock_plans();
    let suggestions = generate_suggestions(&SuggestionRequest::new(&plans), MORNING);

    let ids: Vec<&str> = suggestions.iter().map(|s| s.plan_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(suggestions[0].reason, "Morning cardio routine");
    assert_eq!(suggestions[1].reason, "Morning mobility routine");
}

#[test]
fn test_evening_prefers_strength_then_mobility() {
    let plans = mock_plans();
    let suggestions = generate_suggestions(&SuggestionRequest::new(&plans), EVENING);

    let ids: Vec<&str> = suggestions.iter().map(|s| s.plan_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert_eq!(suggestions[0].reason, "Evening strength routine");
}

#[test]
fn test_catalog_fallback_uses_generic_reason() {
    let plans = vec![
        micro_plan(
            "a",
            "Evening Pushups",
            10,
            PlanCategory::Strength,
            TimePreference::Pm,
            &[],
        ),
        micro_plan(
            "b",
            "Evening Rows",
            15,
            PlanCategory::Strength,
            TimePreference::Pm,
            &[],
        ),
    ];
    let suggestions = generate_suggestions(&SuggestionRequest::new(&plans), MORNING);

    // Morning pool is empty, so all plans are eligible but none is cardio or mobility
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions
        .iter()
        .all(|s| s.reason == "Great option for today"));
    assert_eq!(suggestions[0].plan_id, "a");
    assert_eq!(suggestions[1].plan_id, "b");
}

#[test]
fn test_empty_catalog_yields_no_suggestions() {
    let user_stats = stats(7, 3, Some(date(1)));
    let pain = hip_pain();
    let request = SuggestionRequest::new(&[])
        .with_stats(Some(&user_stats))
        .with_pain(&pain);

    assert!(generate_suggestions(&request, MORNING).is_empty());
    assert!(generate_suggestions(&request, EVENING).is_empty());
}

#[test]
fn test_suggestions_never_repeat_a_plan() {
    let plans = mock_plans();
    let user_stats = stats(3, 2, Some(date(10)));
    let pain = hip_pain();

    for hour in 0..24 {
        let request = SuggestionRequest::new(&plans)
            .with_stats(Some(&user_stats))
            .with_pain(&pain);
        let suggestions = generate_suggestions(&request, hour);
        assert!(suggestions.len() <= 2);
        if suggestions.len() == 2 {
            assert_ne!(suggestions[0].plan_id, suggestions[1].plan_id);
        }
    }
}

#[test]
fn test_generation_is_deterministic_for_fixed_clock() {
    let plans = mock_plans();
    let user_stats = stats(3, 2, Some(date(10)));
    let pain = hip_pain();
    let request = SuggestionRequest::new(&plans)
        .with_stats(Some(&user_stats))
        .with_pain(&pain);

    let engine = SuggestionEngine::with_clock(
        SuggestionEngineConfig::default(),
        FixedClock::at_hour(date(11), 7),
    );

    let first = engine.generate(&request);
    let second = engine.generate(&request);
    assert_eq!(first, second);
    assert_eq!(first[0].plan_id, "1");
    assert_eq!(first[1].plan_id, "3");
}
