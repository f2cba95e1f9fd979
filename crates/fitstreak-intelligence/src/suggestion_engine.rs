// ABOUTME: Rule-based workout suggestion engine choosing up to two micro plans for today
// ABOUTME: Applies miss-streak, pain, progression, time-of-day and catalog fallback rules in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout suggestion engine
//!
//! The engine is a pure function of the plan catalog, the user's adherence
//! stats, recent pain reports, an optional duration filter and the local hour.
//! It never fails: missing stats count as zero streaks and an empty catalog
//! yields no suggestions.
//!
//! Rules run in a fixed order, see [`SuggestionRule::CASCADE`]. Each rule
//! only considers plans that no earlier rule picked, and whenever several
//! plans qualify the first one in catalog order wins.

use crate::clock::{Clock, DayPeriod, SystemClock};
use crate::config::{SuggestionEngineConfig, SuggestionThresholds};
use crate::pain_analysis::painful_areas;
use fitstreak_core::constants::suggestions::GENERIC_REASON;
use fitstreak_core::models::{
    AdherenceStats, MicroPlan, PainReport, PlanCategory, WorkoutSuggestion,
};
use tracing::debug;

/// Inputs for one suggestion call
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRequest<'a> {
    /// Current plan catalog
    pub plans: &'a [MicroPlan],
    /// Adherence stats, if the user has any
    pub stats: Option<&'a AdherenceStats>,
    /// Pain reports from the trailing window
    pub recent_pain: &'a [PainReport],
    /// Only suggest plans of exactly this many minutes
    pub selected_duration: Option<u32>,
}

impl<'a> SuggestionRequest<'a> {
    /// Request over `plans` with no stats, no pain and no duration filter
    #[must_use]
    pub const fn new(plans: &'a [MicroPlan]) -> Self {
        Self {
            plans,
            stats: None,
            recent_pain: &[],
            selected_duration: None,
        }
    }

    /// Attach adherence stats
    #[must_use]
    pub fn with_stats(mut self, stats: Option<&'a AdherenceStats>) -> Self {
        self.stats = stats;
        self
    }

    /// Attach recent pain reports
    #[must_use]
    pub fn with_pain(mut self, recent_pain: &'a [PainReport]) -> Self {
        self.recent_pain = recent_pain;
        self
    }

    /// Restrict suggestions to one duration; zero means no filter
    #[must_use]
    pub fn with_duration(mut self, selected_duration: Option<u32>) -> Self {
        self.selected_duration = selected_duration;
        self
    }
}

/// One step of the suggestion cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRule {
    /// Short session to break a run of missed days
    MissStreakRecovery,
    /// Mobility session for a body area with repeated pain
    PainMitigation,
    /// Longer session to reward a run of completed days
    StreakProgression,
    /// Category chosen by morning or evening context
    TimeOfDayCategory,
    /// First remaining plans in catalog order
    CatalogFallback,
}

impl SuggestionRule {
    /// Rules in evaluation order
    pub const CASCADE: [Self; 5] = [
        Self::MissStreakRecovery,
        Self::PainMitigation,
        Self::StreakProgression,
        Self::TimeOfDayCategory,
        Self::CatalogFallback,
    ];

    /// Stable rule name for logging
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MissStreakRecovery => "miss_streak_recovery",
            Self::PainMitigation => "pain_mitigation",
            Self::StreakProgression => "streak_progression",
            Self::TimeOfDayCategory => "time_of_day_category",
            Self::CatalogFallback => "catalog_fallback",
        }
    }

    fn apply(self, ctx: &RuleContext<'_>, picks: &mut Picks) {
        match self {
            Self::MissStreakRecovery => miss_streak_recovery(ctx, picks),
            Self::PainMitigation => pain_mitigation(ctx, picks),
            Self::StreakProgression => streak_progression(ctx, picks),
            Self::TimeOfDayCategory => time_of_day_category(ctx, picks),
            Self::CatalogFallback => catalog_fallback(ctx, picks),
        }
    }
}

/// Everything a rule may look at, derived once per call
struct RuleContext<'a> {
    candidates: Vec<&'a MicroPlan>,
    stats: AdherenceStats,
    painful_areas: Vec<String>,
    selected_duration: Option<u32>,
    period: DayPeriod,
    thresholds: &'a SuggestionThresholds,
}

impl<'a> RuleContext<'a> {
    fn first_unpicked(
        &self,
        picks: &Picks,
        predicate: impl Fn(&MicroPlan) -> bool,
    ) -> Option<&'a MicroPlan> {
        self.candidates
            .iter()
            .copied()
            .find(|plan| !picks.contains(&plan.id) && predicate(*plan))
    }

    fn fits_period(&self, plan: &MicroPlan) -> bool {
        self.period.accepts(plan.time_preference)
    }
}

/// Suggestions accepted so far
struct Picks {
    suggestions: Vec<WorkoutSuggestion>,
    capacity: usize,
}

impl Picks {
    fn new(capacity: usize) -> Self {
        Self {
            suggestions: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn contains(&self, plan_id: &str) -> bool {
        self.suggestions.iter().any(|s| s.plan_id == plan_id)
    }

    fn is_full(&self) -> bool {
        self.suggestions.len() >= self.capacity
    }

    fn push(&mut self, rule: SuggestionRule, plan: &MicroPlan, reason: String) {
        debug!(rule = rule.name(), plan_id = %plan.id, %reason, "Suggestion selected");
        self.suggestions
            .push(WorkoutSuggestion::from_plan(plan, reason));
    }
}

fn miss_streak_recovery(ctx: &RuleContext<'_>, picks: &mut Picks) {
    let miss_streak = ctx.stats.miss_streak;
    if miss_streak < ctx.thresholds.miss_streak_trigger {
        return;
    }
    let minutes = ctx.thresholds.quick_win_minutes;
    let plan = ctx
        .first_unpicked(picks, |p| p.duration == minutes && ctx.fits_period(p))
        .or_else(|| ctx.first_unpicked(picks, |p| p.duration == minutes));

    if let Some(plan) = plan {
        picks.push(
            SuggestionRule::MissStreakRecovery,
            plan,
            format!("Quick {minutes}-min win to break the {miss_streak}-day miss streak!"),
        );
    }
}

fn pain_mitigation(ctx: &RuleContext<'_>, picks: &mut Picks) {
    let Some(area) = ctx.painful_areas.first() else {
        return;
    };
    let needle = area.to_lowercase();
    let is_mobility = |p: &MicroPlan| p.category == PlanCategory::Mobility && ctx.fits_period(p);

    let plan = ctx
        .candidates
        .iter()
        .copied()
        .find(|p| is_mobility(*p) && p.name.to_lowercase().contains(&needle))
        .or_else(|| ctx.candidates.iter().copied().find(|p| is_mobility(*p)));

    match plan {
        Some(plan) if !picks.contains(&plan.id) => picks.push(
            SuggestionRule::PainMitigation,
            plan,
            format!("Mobility work to address {area} discomfort"),
        ),
        Some(plan) => debug!(plan_id = %plan.id, "Mobility plan already suggested"),
        None => debug!(%area, "No mobility plan available for painful area"),
    }
}

fn streak_progression(ctx: &RuleContext<'_>, picks: &mut Picks) {
    let complete_streak = ctx.stats.complete_streak;
    if complete_streak < ctx.thresholds.complete_streak_trigger {
        return;
    }
    let target = progression_target(ctx.thresholds, ctx.selected_duration, &ctx.stats);
    if let Some(plan) = ctx.first_unpicked(picks, |p| p.duration == target && ctx.fits_period(p))
    {
        picks.push(
            SuggestionRule::StreakProgression,
            plan,
            format!("{complete_streak}-day streak! Ready for {target}min challenge"),
        );
    }
}

fn time_of_day_category(ctx: &RuleContext<'_>, picks: &mut Picks) {
    let mut pool: Vec<&MicroPlan> = ctx
        .candidates
        .iter()
        .copied()
        .filter(|p| !picks.contains(&p.id) && ctx.fits_period(p))
        .collect();
    if pool.is_empty() {
        pool = ctx
            .candidates
            .iter()
            .copied()
            .filter(|p| !picks.contains(&p.id))
            .collect();
    }

    for category in ctx.period.preferred_categories() {
        if picks.is_full() {
            break;
        }
        let plan = pool
            .iter()
            .copied()
            .find(|p| p.category == category && !picks.contains(&p.id));
        if let Some(plan) = plan {
            picks.push(
                SuggestionRule::TimeOfDayCategory,
                plan,
                format!("{} {category} routine", ctx.period.label()),
            );
        }
    }
}

fn catalog_fallback(ctx: &RuleContext<'_>, picks: &mut Picks) {
    while !picks.is_full() {
        let Some(plan) = ctx.first_unpicked(picks, |_| true) else {
            break;
        };
        picks.push(SuggestionRule::CatalogFallback, plan, GENERIC_REASON.to_owned());
    }
}

/// Session length the progression rule aims for
///
/// A selected duration is used as-is up to the cap. Otherwise the base is the
/// active-user or new-user duration (depending only on whether any activity
/// was ever recorded) plus one progression step, capped.
#[must_use]
pub fn progression_target(
    thresholds: &SuggestionThresholds,
    selected_duration: Option<u32>,
    stats: &AdherenceStats,
) -> u32 {
    selected_duration.filter(|&d| d > 0).map_or_else(
        || {
            let base = if stats.last_activity_date.is_some() {
                thresholds.active_base_minutes
            } else {
                thresholds.new_user_base_minutes
            };
            (base + thresholds.progression_step_minutes).min(thresholds.max_progression_minutes)
        },
        |d| d.min(thresholds.max_progression_minutes),
    )
}

/// Workout suggestion engine with an injectable clock
#[derive(Debug, Clone)]
pub struct SuggestionEngine<C: Clock = SystemClock> {
    config: SuggestionEngineConfig,
    clock: C,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionEngine {
    /// Engine using the global configuration and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SuggestionEngineConfig::global().clone(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> SuggestionEngine<C> {
    /// Engine with explicit configuration and clock
    #[must_use]
    pub const fn with_clock(config: SuggestionEngineConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &SuggestionEngineConfig {
        &self.config
    }

    /// Clock the engine reads the local hour from
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Suggest up to the configured number of plans for the current local hour
    #[must_use]
    pub fn generate(&self, request: &SuggestionRequest<'_>) -> Vec<WorkoutSuggestion> {
        self.generate_at_hour(request, self.clock.local_hour())
    }

    /// Suggest plans as if the local time were `hour`
    #[must_use]
    pub fn generate_at_hour(
        &self,
        request: &SuggestionRequest<'_>,
        hour: u32,
    ) -> Vec<WorkoutSuggestion> {
        let selected_duration = request.selected_duration.filter(|&d| d > 0);
        let candidates: Vec<&MicroPlan> = request
            .plans
            .iter()
            .filter(|p| selected_duration.is_none_or(|d| p.duration == d))
            .collect();

        let ctx = RuleContext {
            candidates,
            stats: request.stats.cloned().unwrap_or_default(),
            painful_areas: painful_areas(request.recent_pain, &self.config.pain),
            selected_duration,
            period: DayPeriod::from_hour(hour, self.config.thresholds.afternoon_start_hour),
            thresholds: &self.config.thresholds,
        };

        debug!(
            candidates = ctx.candidates.len(),
            period = ?ctx.period,
            miss_streak = ctx.stats.miss_streak,
            complete_streak = ctx.stats.complete_streak,
            painful_areas = ?ctx.painful_areas,
            "Generating workout suggestions"
        );

        let mut picks = Picks::new(self.config.limits.max_suggestions);
        for rule in SuggestionRule::CASCADE {
            if picks.is_full() {
                break;
            }
            rule.apply(&ctx, &mut picks);
        }

        let mut suggestions = picks.suggestions;
        suggestions.truncate(self.config.limits.max_suggestions);
        suggestions
    }
}

/// Suggest plans for `hour` using the default configuration
#[must_use]
pub fn generate_suggestions(request: &SuggestionRequest<'_>, hour: u32) -> Vec<WorkoutSuggestion> {
    SuggestionEngine::with_clock(SuggestionEngineConfig::default(), SystemClock)
        .generate_at_hour(request, hour)
}
