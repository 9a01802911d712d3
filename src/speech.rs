//! Narration length estimate for UI feedback.
//!
//! The estimate is a word-count heuristic. It is not derived from, or
//! synchronized with, actual speech playback.

/// Estimated seconds of narration per word.
pub const SECONDS_PER_WORD: f64 = 0.15;

/// Estimates how long reading `text` aloud takes, in seconds.
///
/// Words are runs of non-whitespace. Empty or whitespace-only text is 0.0.
pub fn estimate_speech_duration(text: &str) -> f64 {
    text.split_whitespace().count() as f64 * SECONDS_PER_WORD
}
