//! Staged reveal of a finished move for animated front ends.
//!
//! The engine resolves a move synchronously; a front end that wants to show
//! the rotation first and the removals second drives a `MoveReveal` with
//! elapsed time instead of re-deriving anything:
//!
//! ```text
//! Idle --start--> Rotating --rotate--> Flashing --flash--> Settled --finish--> Idle
//! ```
//!
//! Input is only accepted while `Idle` or `Settled`.

use rustc_hash::FxHashSet;
use std::time::Duration;

use super::game::MoveResult;
use crate::board::{Board, Position};

/// Where the reveal currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    #[default]
    Idle,
    /// Toggled toothpick is turning; nothing removed yet.
    Rotating,
    /// Cells about to be removed are highlighted.
    Flashing,
    /// Final board is showing; waiting for `finish`.
    Settled,
}

/// How long each animated phase lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTimings {
    pub rotate: Duration,
    pub flash: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            rotate: Duration::from_millis(10),
            flash: Duration::from_millis(250),
        }
    }
}

/// Time-driven state machine over one `MoveResult`.
#[derive(Clone, Debug, Default)]
pub struct MoveReveal {
    timings: RevealTimings,
    phase: RevealPhase,
    /// Time spent in the current phase.
    elapsed: Duration,
    /// Previous board with the toggle applied, nothing removed.
    staged: Option<Board>,
    /// `removed_cells` of the current result, for per-cell lookups.
    removing: FxHashSet<Position>,
    result: Option<MoveResult>,
}

impl MoveReveal {
    #[must_use]
    pub fn new(timings: RevealTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Can the player click right now?
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, RevealPhase::Idle | RevealPhase::Settled)
    }

    /// Begin revealing `result`, which was produced from `previous`.
    ///
    /// Any settled result not yet collected is dropped. Returns `false` and
    /// does nothing if a reveal is still animating, or if `previous` is not
    /// the board `result` was played on (wrong size, or the toggled cell
    /// does not turn into `result.orientation`).
    pub fn start(&mut self, previous: &Board, result: MoveResult) -> bool {
        if !self.accepts_input() || previous.size() != result.board.size() {
            return false;
        }

        let mut staged = previous.clone();
        if staged.toggle(result.toggled) != Ok(result.orientation) {
            return false;
        }

        self.staged = Some(staged);
        self.removing = result.removed_cells.iter().copied().collect();
        self.result = Some(result);
        self.phase = RevealPhase::Rotating;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Advance by `dt`, possibly through several phases. Returns the new phase.
    pub fn advance(&mut self, dt: Duration) -> RevealPhase {
        self.elapsed += dt;

        loop {
            let limit = match self.phase {
                RevealPhase::Rotating => self.timings.rotate,
                RevealPhase::Flashing => self.timings.flash,
                RevealPhase::Idle | RevealPhase::Settled => break,
            };
            if self.elapsed < limit {
                break;
            }
            self.elapsed -= limit;
            self.phase = match self.phase {
                RevealPhase::Rotating => RevealPhase::Flashing,
                _ => RevealPhase::Settled,
            };
        }

        if self.phase == RevealPhase::Settled {
            self.elapsed = Duration::ZERO;
        }
        self.phase
    }

    /// Toothpick shown mid-rotation (while `Rotating` or `Flashing`).
    #[must_use]
    pub fn rotating_cell(&self) -> Option<Position> {
        match self.phase {
            RevealPhase::Rotating | RevealPhase::Flashing => self.result.as_ref().map(|r| r.toggled),
            _ => None,
        }
    }

    /// Cells to highlight (only while `Flashing`).
    #[must_use]
    pub fn highlighted_cells(&self) -> &[Position] {
        match (&self.phase, &self.result) {
            (RevealPhase::Flashing, Some(r)) => &r.removed_cells,
            _ => &[],
        }
    }

    /// Should the renderer highlight `pos` right now?
    #[must_use]
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.phase == RevealPhase::Flashing && self.removing.contains(&pos)
    }

    /// Board to draw for the current phase, `None` while idle.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        match self.phase {
            RevealPhase::Idle => None,
            RevealPhase::Rotating | RevealPhase::Flashing => self.staged.as_ref(),
            RevealPhase::Settled => self.result.as_ref().map(|r| &r.board),
        }
    }

    /// Hand back the settled result and return to `Idle`.
    ///
    /// `None` unless settled.
    pub fn finish(&mut self) -> Option<MoveResult> {
        if self.phase != RevealPhase::Settled {
            return None;
        }
        self.phase = RevealPhase::Idle;
        self.staged = None;
        self.removing.clear();
        self.result.take()
    }
}
