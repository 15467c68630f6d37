//! Duration to segment planning for video prompts.
//!
//! Video generators accept clips of at most [`MAX_SEGMENT_SECONDS`] seconds,
//! so a requested total duration is split into an ordered list of segment
//! lengths. The split is deterministic: clamp, then greedily peel off full
//! segments until the remainder is exhausted.

/// Maximum length of a single video segment, in seconds.
pub const MAX_SEGMENT_SECONDS: u32 = 8;
/// Minimum total video duration accepted by the planner.
pub const MIN_TOTAL_SECONDS: u32 = 8;
/// Maximum total video duration accepted by the planner.
pub const MAX_TOTAL_SECONDS: u32 = 32;

/// Splits a total duration into ordered segment lengths.
///
/// The input is clamped to `[MIN_TOTAL_SECONDS, MAX_TOTAL_SECONDS]` first.
/// Guarantees: the segments sum to the clamped total, every segment is in
/// `(0, MAX_SEGMENT_SECONDS]`, and the segment count equals
/// `ceil(clamped / MAX_SEGMENT_SECONDS)`.
pub fn plan_segments(total_seconds: u32) -> Vec<u32> {
    let mut remaining = total_seconds.clamp(MIN_TOTAL_SECONDS, MAX_TOTAL_SECONDS);
    let mut segments = Vec::new();
    while remaining > 0 {
        let seg = remaining.min(MAX_SEGMENT_SECONDS);
        segments.push(seg);
        remaining -= seg;
    }
    segments
}
