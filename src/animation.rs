//! Frame-driven animation of a single quarter turn.
//!
//! The controller owns the cube state. A move starts with
//! [`CubeController::rotate`], advances by a fixed angle on every
//! [`CubeController::tick`] and is committed to the cube state in one step
//! when the angle reaches a quarter turn. At most one move is in flight.

use std::f32::consts::FRAC_PI_2;

use crate::cube::{Coord, CubeState, Cubie};
use crate::error::{CubeError, Result};
use crate::moves::{lookup, Axis, MoveKind, MoveRule};

/// Angle added per tick, in radians.
pub const DEFAULT_STEP: f32 = 0.1;

/// Angle at which a move is committed.
pub const QUARTER_TURN: f32 = FRAC_PI_2;

/// Upper bound on the number of ticks one quarter turn may take.
pub const MAX_TICKS_PER_TURN: u32 = 100_000;

/// Smallest accepted step, so a turn never exceeds [`MAX_TICKS_PER_TURN`].
pub const MIN_STEP: f32 = QUARTER_TURN / MAX_TICKS_PER_TURN as f32;

/// Number of ticks after which a turn with `step` commits.
fn ticks_per_turn(step: f32) -> u32 {
    ((QUARTER_TURN / step).ceil() as u32).clamp(1, MAX_TICKS_PER_TURN)
}

/// Animation state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnimationState {
    /// No move in flight.
    #[default]
    Idle,
    /// A move is being animated.
    Rotating {
        kind: MoveKind,
        axis: Axis,
        /// The 9 cubies of the turned slice, as they were when the move
        /// started.
        affected: Vec<Cubie>,
        /// Ticks taken so far.
        ticks: u32,
        /// Current partial rotation, in `0.0..QUARTER_TURN`.
        angle: f32,
    },
}

/// Read-only view of an in-flight move, for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSnapshot<'a> {
    pub kind: MoveKind,
    pub axis: Axis,
    /// Signed axis to draw the rotation around.
    pub render_axis: (f32, f32, f32),
    pub angle: f32,
    pub affected: &'a [Cubie],
}

impl AnimationSnapshot<'_> {
    /// Fraction of the quarter turn completed, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        (self.angle / QUARTER_TURN).clamp(0.0, 1.0)
    }

    /// Returns whether the cubie at `position` is part of the turning slice.
    pub fn is_affected(&self, position: Coord) -> bool {
        self.affected.iter().any(|cubie| cubie.position == position)
    }
}

/// Owns the cube state and animates moves on it.
#[derive(Debug, Clone)]
pub struct CubeController {
    state: CubeState,
    animation: AnimationState,
    /// Angle added per tick, in radians.
    step: f32,
    /// Ticks after which an in-flight move commits.
    turn_ticks: u32,
}

impl Default for CubeController {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeController {
    /// Creates an idle controller on a solved cube with [`DEFAULT_STEP`].
    pub fn new() -> Self {
        Self {
            state: CubeState::create_initial(),
            animation: AnimationState::Idle,
            step: DEFAULT_STEP,
            turn_ticks: ticks_per_turn(DEFAULT_STEP),
        }
    }

    /// Creates an idle controller on a solved cube with a custom step.
    ///
    /// The step must lie in `[MIN_STEP, QUARTER_TURN]`.
    pub fn with_step(step: f32) -> Result<Self> {
        if !(MIN_STEP..=QUARTER_TURN).contains(&step) {
            return Err(CubeError::InvalidStep(step));
        }
        Ok(Self {
            step,
            turn_ticks: ticks_per_turn(step),
            ..Self::new()
        })
    }

    /// Angle added per tick, in radians.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Latest committed cube state.
    pub fn current_state(&self) -> &CubeState {
        &self.state
    }

    /// Current state machine state.
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Returns whether a move is in flight.
    pub fn is_rotating(&self) -> bool {
        matches!(self.animation, AnimationState::Rotating { .. })
    }

    /// Returns the in-flight move, or `None` when idle.
    pub fn animation_snapshot(&self) -> Option<AnimationSnapshot<'_>> {
        match &self.animation {
            AnimationState::Idle => None,
            AnimationState::Rotating {
                kind,
                axis,
                affected,
                angle,
                ..
            } => Some(AnimationSnapshot {
                kind: *kind,
                axis: *axis,
                render_axis: kind.rule().render_axis(),
                angle: *angle,
                affected,
            }),
        }
    }

    /// Starts the move named by `key`.
    ///
    /// Unknown keys are rejected before anything else is looked at, leaving
    /// the controller untouched. A valid key while a move is in flight is
    /// ignored.
    pub fn rotate(&mut self, key: &str) -> Result<()> {
        let rule = lookup(key).inspect_err(|e| log::warn!("{e}"))?;
        self.start(rule);
        Ok(())
    }

    /// Starts `kind` if idle. Returns whether the move was started.
    pub fn rotate_move(&mut self, kind: MoveKind) -> bool {
        self.start(kind.rule())
    }

    fn start(&mut self, rule: &'static MoveRule) -> bool {
        if let AnimationState::Rotating { kind, .. } = &self.animation {
            log::debug!("ignoring {} while {kind} is in flight", rule.kind);
            return false;
        }

        let (affected, _) = rule.slice(&self.state);
        log::debug!(
            "starting {} around {} ({} cubies)",
            rule.kind,
            rule.axis,
            affected.len()
        );
        self.animation = AnimationState::Rotating {
            kind: rule.kind,
            axis: rule.axis,
            affected,
            ticks: 0,
            angle: 0.0,
        };
        true
    }

    /// Advances the in-flight move by one step, committing it once it reaches
    /// a quarter turn. Does nothing when idle.
    ///
    /// The angle is derived from the tick count rather than accumulated, so a
    /// turn always commits after `ceil(QUARTER_TURN / step)` ticks.
    pub fn tick(&mut self) {
        let AnimationState::Rotating {
            kind, ticks, angle, ..
        } = &mut self.animation
        else {
            return;
        };

        *ticks += 1;
        if *ticks < self.turn_ticks {
            *angle = (*ticks as f32 * self.step).min(QUARTER_TURN);
            log::trace!("{kind} at {angle:.3} rad");
            return;
        }

        *angle = QUARTER_TURN;
        self.commit();
    }

    /// Writes the finished move into the cube state and returns to idle.
    fn commit(&mut self) {
        let AnimationState::Rotating { kind, affected, .. } =
            std::mem::take(&mut self.animation)
        else {
            return;
        };

        let rule = kind.rule();
        let updates: Vec<(Coord, Cubie)> = affected
            .iter()
            .map(|cubie| (cubie.position, rule.apply(cubie)))
            .collect();
        self.state = self.state.replace(&updates);
        log::debug!("committed {kind}");
    }

    /// Ticks until idle. Returns the number of ticks taken.
    pub fn finish(&mut self) -> usize {
        let mut ticks = 0;
        while self.is_rotating() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Completes any in-flight move, then performs `kind` to completion.
    pub fn apply_move(&mut self, kind: MoveKind) {
        self.finish();
        self.rotate_move(kind);
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ticks needed for a quarter turn at [`DEFAULT_STEP`].
    const DEFAULT_TICKS: usize = 16;

    #[test]
    fn test_starts_idle() {
        let controller = CubeController::new();
        assert!(!controller.is_rotating());
        assert_eq!(controller.animation(), &AnimationState::Idle);
        assert!(controller.animation_snapshot().is_none());
        assert_eq!(controller.current_state(), &CubeState::create_initial());
    }

    #[test]
    fn test_rotate_selects_slice() {
        let mut controller = CubeController::new();
        controller.rotate("R").unwrap();

        let snapshot = controller.animation_snapshot().unwrap();
        assert_eq!(snapshot.kind, MoveKind::R);
        assert_eq!(snapshot.axis, Axis::X);
        assert_eq!(snapshot.angle, 0.0);
        assert_eq!(snapshot.affected.len(), 9);
        assert!(snapshot.affected.iter().all(|cubie| cubie.position.0 == 2));
        assert!(snapshot.is_affected((2, 1, 1)));
        assert!(!snapshot.is_affected((1, 1, 1)));
    }

    #[test]
    fn test_state_unchanged_until_commit() {
        let mut controller = CubeController::new();
        controller.rotate("U").unwrap();
        for _ in 0..DEFAULT_TICKS - 1 {
            controller.tick();
            assert!(controller.is_rotating());
            assert_eq!(controller.current_state(), &CubeState::create_initial());
        }
        controller.tick();
        assert!(!controller.is_rotating());
        assert_ne!(controller.current_state(), &CubeState::create_initial());
    }

    #[test]
    fn test_tick_advances_angle() {
        let mut controller = CubeController::new();
        controller.rotate("F").unwrap();
        controller.tick();
        controller.tick();
        let snapshot = controller.animation_snapshot().unwrap();
        assert!((snapshot.angle - 2.0 * DEFAULT_STEP).abs() < 1e-6);
        assert!((snapshot.progress() - 0.2 / QUARTER_TURN).abs() < 1e-6);
    }

    #[test]
    fn test_single_r_move() {
        let initial = CubeState::create_initial();
        let mut controller = CubeController::new();
        controller.rotate("R").unwrap();
        assert_eq!(controller.finish(), DEFAULT_TICKS);

        let state = controller.current_state();
        assert!(state.is_complete());
        for before in initial.cubies() {
            let (x, y, z) = before.position;
            if x == 2 {
                let after = state.get((x, 2 - z, y)).unwrap();
                assert_eq!(after.faces.back, before.faces.top);
                assert_eq!(after.faces.bottom, before.faces.back);
                assert_eq!(after.faces.front, before.faces.bottom);
                assert_eq!(after.faces.top, before.faces.front);
                assert_eq!(after.faces.left, before.faces.left);
                assert_eq!(after.faces.right, before.faces.right);
            } else {
                assert_eq!(state.get(before.position), Some(before));
            }
        }
    }

    #[test]
    fn test_rotate_while_rotating_is_ignored() {
        let mut controller = CubeController::new();
        controller.rotate("R").unwrap();
        controller.tick();
        let before = controller.animation().clone();

        controller.rotate("U").unwrap();
        controller.rotate("R").unwrap();
        assert!(!controller.rotate_move(MoveKind::B));
        assert_eq!(controller.animation(), &before);
    }

    #[test]
    fn test_rotate_move_reports_whether_it_started() {
        let mut controller = CubeController::with_step(QUARTER_TURN).unwrap();
        assert!(controller.rotate_move(MoveKind::F));
        assert!(!controller.rotate_move(MoveKind::F));
        controller.tick();
        assert!(!controller.is_rotating());
        assert!(controller.rotate_move(MoveKind::F));
    }

    #[test]
    fn test_invalid_key_leaves_everything_unchanged() {
        let mut controller = CubeController::new();
        assert_eq!(
            controller.rotate("X"),
            Err(CubeError::InvalidMoveKind("X".to_owned()))
        );
        assert!(!controller.is_rotating());
        assert_eq!(controller.current_state(), &CubeState::create_initial());

        controller.rotate("D").unwrap();
        controller.tick();
        let before = controller.animation().clone();
        assert!(controller.rotate("D'").is_err());
        assert_eq!(controller.animation(), &before);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut controller = CubeController::new();
        controller.tick();
        assert!(!controller.is_rotating());
        assert_eq!(controller.current_state(), &CubeState::create_initial());
        assert_eq!(controller.finish(), 0);
    }

    #[test]
    fn test_custom_step() {
        let mut controller = CubeController::with_step(QUARTER_TURN).unwrap();
        controller.rotate("L").unwrap();
        assert_eq!(controller.finish(), 1);

        let mut controller = CubeController::with_step(0.5).unwrap();
        controller.rotate("L").unwrap();
        assert_eq!(controller.finish(), 4);
    }

    #[test]
    fn test_smallest_step_still_commits() {
        let mut controller = CubeController::with_step(MIN_STEP).unwrap();
        controller.rotate("R").unwrap();
        let ticks = controller.finish();
        assert!(ticks <= MAX_TICKS_PER_TURN as usize, "took {ticks} ticks");
        assert!(!controller.is_rotating());
        assert!(controller.current_state().is_complete());
        assert_ne!(controller.current_state(), &CubeState::create_initial());
    }

    #[test]
    fn test_angle_keeps_growing_past_one_radian() {
        let step = 2e-5;
        let mut controller = CubeController::with_step(step).unwrap();
        controller.rotate("U").unwrap();
        let mut last = 0.0;
        while let Some(snapshot) = controller.animation_snapshot() {
            assert!(
                snapshot.angle > last || snapshot.angle == 0.0,
                "angle stalled at {last}"
            );
            last = snapshot.angle;
            controller.tick();
        }
        assert!(last > 1.0);
    }

    #[test]
    fn test_invalid_step_is_rejected() {
        for step in [0.0, -0.1, 2.0, f32::NAN, 5e-8, MIN_STEP / 2.0] {
            assert!(matches!(
                CubeController::with_step(step),
                Err(CubeError::InvalidStep(_))
            ));
        }
    }

    #[test]
    fn test_l_snapshot_uses_reversed_render_axis() {
        let mut controller = CubeController::new();
        controller.rotate("L").unwrap();
        let snapshot = controller.animation_snapshot().unwrap();
        assert_eq!(snapshot.axis, Axis::X);
        assert_eq!(snapshot.render_axis, (-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_apply_move_finishes_in_flight_move_first() {
        let mut controller = CubeController::new();
        controller.rotate("R").unwrap();
        controller.tick();
        controller.apply_move(MoveKind::U);
        assert!(!controller.is_rotating());

        let mut expected = CubeController::new();
        expected.rotate("R").unwrap();
        expected.finish();
        expected.rotate("U").unwrap();
        expected.finish();
        assert_eq!(controller.current_state(), expected.current_state());
    }

    #[test]
    fn test_four_turns_restore_state() {
        for kind in MoveKind::ALL {
            let mut controller = CubeController::new();
            for _ in 0..4 {
                controller.apply_move(kind);
            }
            assert_eq!(
                controller.current_state(),
                &CubeState::create_initial(),
                "{kind}^4"
            );
        }
    }
}
