// ABOUTME: Exercise demonstration media lookup keyed by workout cue text
// ABOUTME: Matches cues case-insensitively against a fixed table with a generic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitstreak_core::models::WorkoutSuggestion;

/// Animation shown when no exercise in the table matches a cue
pub const GENERIC_WORKOUT_GIF: &str = "https://media.tenor.com/Z5uXJMaLXagAAAAM/workout.gif";

/// Exercise keyword to demonstration animation, checked in order
const EXERCISE_GIFS: &[(&str, &str)] = &[
    (
        "jumping jacks",
        "https://cdn.dribbble.com/userupload/23995967/file/original-b7327e47be94975940e98b26277e5ead.gif",
    ),
    ("push-ups", "https://media.tenor.com/L7tYMDkJGlMAAAAM/push-up.gif"),
    ("squats", "https://media.tenor.com/YwGJNH9kVGAAAAAM/squat.gif"),
    ("plank", "https://media.tenor.com/xB6zMVR5yYsAAAAM/plank.gif"),
    ("burpees", "https://media.tenor.com/W5KvXxjGGUMAAAAM/burpee.gif"),
    ("lunges", "https://media.tenor.com/6iCYvKHKfx0AAAAM/lunge.gif"),
    (
        "mountain climbers",
        "https://media.tenor.com/WUoNqz8yPlwAAAAM/mountain-climbers.gif",
    ),
    ("high knees", "https://media.tenor.com/Kzu0UxNNc78AAAAM/high-knees.gif"),
    ("calf raises", "https://media.tenor.com/M7LqSVSLyY4AAAAM/calf-raise.gif"),
    ("jump rope", "https://media.tenor.com/xB5vG4Y8AIAAAAAS/jump-rope.gif"),
    ("rest", "https://media.tenor.com/T0UQXsXx-eYAAAAM/rest.gif"),
    ("stretch", "https://media.tenor.com/R5L1gLqJo5MAAAAM/stretch.gif"),
    ("sit-ups", "https://media.tenor.com/XxcQT6kRKqQAAAAM/sit-ups.gif"),
    (
        "bicycle crunches",
        "https://media.tenor.com/6hXJwxLRcfEAAAAM/bicycle-crunch.gif",
    ),
    ("side plank", "https://media.tenor.com/yG3yZhNF8GMAAAAM/side-plank.gif"),
    ("tricep dips", "https://media.tenor.com/m1kMYnH4WdYAAAAM/tricep-dips.gif"),
];

/// Demonstration animation for a cue
///
/// The first table keyword contained in the cue wins, so "Side plank hold"
/// resolves to the plank animation.
#[must_use]
pub fn exercise_gif(cue: &str) -> &'static str {
    let cue = cue.to_lowercase();
    EXERCISE_GIFS
        .iter()
        .find(|entry| cue.contains(entry.0))
        .map_or(GENERIC_WORKOUT_GIF, |entry| entry.1)
}

/// Fill `gif_url` of each suggestion from its first cue
pub fn attach_media(suggestions: &mut [WorkoutSuggestion]) {
    for suggestion in suggestions {
        suggestion.gif_url = Some(
            suggestion
                .cues
                .first()
                .map_or(GENERIC_WORKOUT_GIF, |cue| exercise_gif(cue))
                .to_owned(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_matching_ignores_case() {
        assert_eq!(
            exercise_gif("30s Mountain Climbers"),
            "https://media.tenor.com/WUoNqz8yPlwAAAAM/mountain-climbers.gif"
        );
    }

    #[test]
    fn test_first_table_entry_wins() {
        assert_eq!(
            exercise_gif("Side plank hold"),
            "https://media.tenor.com/xB6zMVR5yYsAAAAM/plank.gif"
        );
    }

    #[test]
    fn test_unknown_cue_uses_generic_animation() {
        assert_eq!(exercise_gif("Hip circles"), GENERIC_WORKOUT_GIF);
    }
}
