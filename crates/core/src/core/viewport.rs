//! Scroll- and intersection-driven decisions.
//!
//! Three behaviors share this module: the header's scrolled affordance,
//! the one-way reveal of sections, and the at-most-once latch behind the
//! service-card stagger and the lazy image loader. Everything here is a
//! pure function of positions the adapter measures.

/// Strictly past the threshold counts as scrolled. The affordance is a
/// two-way toggle: scrolling back to the top removes it again.
pub fn header_scrolled(page_y: f64, threshold_px: f64) -> bool {
    page_y > threshold_px
}

/// Whether an element is close enough to the viewport to reveal: its top
/// edge has risen above `viewport_height - margin_px`.
pub fn within_reveal_band(element_top: f64, viewport_height: f64, margin_px: f64) -> bool {
    element_top < viewport_height - margin_px
}

/// Monotonic per-element reveal flags. Once an element has revealed it
/// stays revealed, wherever it scrolls afterwards.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    margin_px: f64,
}

impl RevealTracker {
    pub fn new(element_count: usize, margin_px: f64) -> Self {
        Self {
            revealed: vec![false; element_count],
            margin_px,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Report one element's current top edge. Returns true exactly when
    /// this call flips the element to revealed; out-of-range indices are
    /// ignored.
    pub fn observe(&mut self, index: usize, element_top: f64, viewport_height: f64) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if *slot {
            return false;
        }
        if within_reveal_band(element_top, viewport_height, self.margin_px) {
            *slot = true;
            return true;
        }
        false
    }
}

/// At-most-once latch keyed by element index. The first `try_fire` per
/// index wins; everything after returns false.
#[derive(Debug, Clone)]
pub struct OnceSet {
    fired: Vec<bool>,
}

impl OnceSet {
    pub fn new(element_count: usize) -> Self {
        Self {
            fired: vec![false; element_count],
        }
    }

    pub fn try_fire(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }
}

/// Stagger delay for the element at `position_in_batch` of one observer
/// callback batch.
pub fn stagger_delay_ms(position_in_batch: usize, step_ms: u32) -> u32 {
    u32::try_from(position_in_batch)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// What to do with a lazy image on its first intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LazyEffect {
    /// Real source to swap in, when the element deferred one.
    pub set_src: Option<String>,
}

/// Decide the swap for a lazy image from its deferred-source attribute.
/// Images without one still get the loaded mark; the effect only controls
/// the source swap.
pub fn lazy_effect(data_src: Option<&str>) -> LazyEffect {
    LazyEffect {
        set_src: data_src.filter(|src| !src.is_empty()).map(str::to_owned),
    }
}
