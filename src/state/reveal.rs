/// Fraction of the target that must be inside the viewport.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport's bottom edge so sections reveal slightly before they
/// are fully scrolled in.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Not intersecting yet, keep watching.
    Pending,
    /// First intersection. The caller stops observing.
    Revealed,
    /// Already revealed, nothing to do.
    Settled,
}

/// One-shot visibility flag for a scroll-revealed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, intersecting: bool) -> RevealOutcome {
        if self.visible {
            return RevealOutcome::Settled;
        }
        if intersecting {
            self.visible = true;
            RevealOutcome::Revealed
        } else {
            RevealOutcome::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_first_intersection() {
        let mut latch = RevealLatch::new();
        assert_eq!(latch.observe(false), RevealOutcome::Pending);
        assert!(!latch.is_visible());
        assert_eq!(latch.observe(true), RevealOutcome::Revealed);
        assert!(latch.is_visible());
    }

    #[test]
    fn fires_at_most_once() {
        let mut latch = RevealLatch::new();
        assert_eq!(latch.observe(true), RevealOutcome::Revealed);
        assert_eq!(latch.observe(true), RevealOutcome::Settled);
        assert_eq!(latch.observe(false), RevealOutcome::Settled);
        assert!(latch.is_visible());
    }
}
