//! The page's behavioral constants, gathered in one place.

/// Tunable constants for every behavior, passed to the initializers at
/// startup. The defaults are the values the page has always shipped with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    /// The header gets its scrolled affordance strictly past this offset.
    pub scrolled_threshold_px: f64,
    /// Reveal elements whose top rises above `viewport - margin`.
    pub reveal_margin_px: f64,
    /// Per-position delay between service-card fade-ins in one batch.
    pub card_stagger_step_ms: u32,
    /// Intersection ratio that counts as visible for service cards.
    pub card_intersection_threshold: f64,
    /// Fixed delay of the placeholder submission.
    pub submit_delay_ms: u32,
    /// Breathing room between the header and a scrolled-to section.
    pub anchor_gap_px: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 10.0,
            reveal_margin_px: 150.0,
            card_stagger_step_ms: 100,
            card_intersection_threshold: 0.1,
            submit_delay_ms: 1_500,
            anchor_gap_px: 20.0,
        }
    }
}
