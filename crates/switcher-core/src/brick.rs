//! Brick verification: falsifiable assertions a widget checks before it
//! is allowed to paint.
//!
//! Every [`Widget`](crate::Widget) is a [`Brick`]. A brick lists the
//! assertions it makes about its own state and a paint budget; hosts call
//! [`Brick::can_render`] and skip painting a brick whose assertions fail.

use std::time::{Duration, Instant};

/// Brick assertion that must hold for the brick to render.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickAssertion {
    /// The continuous ratio lies in [0.0, 1.0]
    RatioInRange,

    /// The thumb rectangle lies inside the content rectangle
    ThumbWithinTrack,

    /// Maximum render latency in milliseconds
    MaxLatencyMs(u32),
}

/// Performance budget for a brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBudget {
    /// Maximum time for measure phase
    pub measure_ms: u32,
    /// Maximum time for layout phase
    pub layout_ms: u32,
    /// Maximum time for paint phase
    pub paint_ms: u32,
    /// Total budget (may be less than sum of phases)
    pub total_ms: u32,
}

impl BrickBudget {
    /// Create a budget with equal distribution across phases
    #[must_use]
    pub const fn uniform(total_ms: u32) -> Self {
        let phase_ms = total_ms / 3;
        Self {
            measure_ms: phase_ms,
            layout_ms: phase_ms,
            paint_ms: phase_ms,
            total_ms,
        }
    }
}

impl Default for BrickBudget {
    fn default() -> Self {
        // 16ms total for 60fps
        Self::uniform(16)
    }
}

/// Result of verifying brick assertions
#[derive(Debug, Clone)]
pub struct BrickVerification {
    /// All assertions that passed
    pub passed: Vec<BrickAssertion>,
    /// All assertions that failed with reasons
    pub failed: Vec<(BrickAssertion, String)>,
    /// Time taken to verify
    pub verification_time: Duration,
}

impl BrickVerification {
    /// Start collecting results for a verification run.
    #[must_use]
    pub fn builder() -> VerificationBuilder {
        VerificationBuilder {
            passed: Vec::new(),
            failed: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Check if all assertions passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Accumulates assertion outcomes into a [`BrickVerification`].
#[derive(Debug)]
pub struct VerificationBuilder {
    passed: Vec<BrickAssertion>,
    failed: Vec<(BrickAssertion, String)>,
    started: Instant,
}

impl VerificationBuilder {
    /// Record the outcome of one assertion.
    #[must_use]
    pub fn check(
        mut self,
        assertion: BrickAssertion,
        holds: bool,
        reason: impl FnOnce() -> String,
    ) -> Self {
        if holds {
            self.passed.push(assertion);
        } else {
            self.failed.push((assertion, reason()));
        }
        self
    }

    /// Finish the run.
    #[must_use]
    pub fn finish(self) -> BrickVerification {
        BrickVerification {
            passed: self.passed,
            failed: self.failed,
            verification_time: self.started.elapsed(),
        }
    }
}

/// Core Brick trait: assertions and a budget every widget declares.
pub trait Brick: Send + Sync {
    /// Get the brick's unique type name
    fn brick_name(&self) -> &'static str;

    /// Get all assertions for this brick
    fn assertions(&self) -> &[BrickAssertion];

    /// Get the performance budget
    fn budget(&self) -> BrickBudget;

    /// Verify all assertions against current state
    fn verify(&self) -> BrickVerification;

    /// Check if this brick can be rendered (all assertions pass)
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}
