//! Movement domain: target-seeking motion controller with climb mode.
//!
//! The controller is plain data driven by [`MotionController::tick`]. It owns
//! the avatar's kinematic record, steers horizontally toward a destination
//! with bounded acceleration, switches to a vertical climb when a support
//! obstacle blocks the way and escapes when acceleration stops producing
//! progress.

use bevy::prelude::*;

use crate::movement::{
    ContactTracker, LocomotionError, LocomotionTuning, ProgressSample, StuckDetector,
    StuckVerdict,
};

/// Horizontal coordinate meaning "no destination" / "no pending override".
pub const NO_DESTINATION: f32 = -1.0;

/// Horizontal speeds below this count as standing still.
const REST_SPEED: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

/// Visible horizontal range supplied by the camera each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalRange {
    pub min: f32,
    pub max: f32,
}

impl HorizontalRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Position and velocity measured by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySample {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInputs {
    pub dt: f32,
    pub view: HorizontalRange,
    /// When present the host integrates position; otherwise the controller does.
    pub body: Option<BodySample>,
    /// Collider bounds, informational only.
    pub collider_bounds: Option<Rect>,
}

impl TickInputs {
    pub fn headless(dt: f32, view: HorizontalRange) -> Self {
        Self {
            dt,
            view,
            body: None,
            collider_bounds: None,
        }
    }
}

/// The single mutable kinematic record of the avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub destination: Vec2,
    pub destination_override: Vec2,
    /// `position - destination`, components snapped to zero near arrival.
    pub relation_to_destination: Vec2,
    pub in_climb: bool,
    pub climb_extent: f32,
    pub spawned: bool,
    pub light_toggle: bool,
    pub facing: Facing,
    pub collider_bounds: Rect,
}

impl AvatarState {
    fn inert() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            destination: Vec2::new(NO_DESTINATION, 0.0),
            destination_override: Vec2::new(NO_DESTINATION, 0.0),
            relation_to_destination: Vec2::ZERO,
            in_climb: false,
            climb_extent: 0.0,
            spawned: false,
            light_toggle: false,
            facing: Facing::Right,
            collider_bounds: Rect::default(),
        }
    }

    pub fn has_destination(&self) -> bool {
        self.destination.x >= 0.0
    }

    pub fn has_pending_override(&self) -> bool {
        self.destination_override.x >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Not spawned and no spawn root known.
    Inert,
    /// The one-time spawn transition ran this tick.
    Spawned,
    /// Outside the visible range; velocity forced to zero.
    Frozen,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbCause {
    Obstacle,
    StuckEscape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClimbTransition {
    Started { extent: f32, cause: ClimbCause },
    Finished,
}

/// Named values published to both animation rigs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationParams {
    pub speed: f32,
    pub in_climb: bool,
    pub climb_extent: f32,
    pub light_toggle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightParams {
    pub light_on: bool,
    pub facing_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub animation: AnimationParams,
    pub light: LightParams,
    pub flip_x: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub status: TickStatus,
    pub position: Vec2,
    pub velocity: Vec2,
    pub climb: Option<ClimbTransition>,
    /// Present on ticks that publish to the presentation sinks.
    pub presentation: Option<Presentation>,
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    tuning: LocomotionTuning,
    state: AvatarState,
    spawn_root: Option<Vec2>,
    stuck: StuckDetector,
}

impl MotionController {
    pub fn initialize(tuning: LocomotionTuning) -> Result<Self, LocomotionError> {
        tuning.validate()?;
        if tuning.accel == 0.0 {
            warn!("Locomotion accel is zero: avatar keeps its speed and never brakes early");
        }

        Ok(Self {
            stuck: StuckDetector::new(tuning.stuck_escape_time),
            tuning,
            state: AvatarState::inert(),
            spawn_root: None,
        })
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn state(&self) -> &AvatarState {
        &self.state
    }

    pub fn stuck_time(&self) -> f32 {
        self.stuck.stuck_time()
    }

    pub fn spawn_root(&self) -> Option<Vec2> {
        self.spawn_root
    }

    /// Assign the spawn root. A negative `x` means "unassigned".
    pub fn assign_spawn_root(&mut self, root: Vec2) {
        self.spawn_root = (root.x >= 0.0).then_some(root);
    }

    /// Post a one-shot destination; a later post before the next tick wins.
    pub fn post_destination(&mut self, destination: Vec2) {
        self.state.destination_override = destination;
    }

    pub fn set_light_held(&mut self, held: bool) {
        self.state.light_toggle = held;
    }

    pub fn face(&mut self, facing: Facing) {
        self.state.facing = facing;
    }

    pub fn tick(&mut self, inputs: &TickInputs, contacts: &ContactTracker) -> TickOutput {
        let dt = if inputs.dt.is_finite() {
            inputs.dt.max(0.0)
        } else {
            0.0
        };

        if let Some(body) = inputs.body {
            self.state.position = body.position;
            self.state.velocity = body.velocity;
        }
        if let Some(bounds) = inputs.collider_bounds {
            self.state.collider_bounds = bounds;
        }

        if !self.state.spawned {
            return match self.spawn_root {
                Some(root) => {
                    self.spawn_at_root(root);
                    self.output(TickStatus::Spawned, None)
                }
                None => self.output(TickStatus::Inert, None),
            };
        }

        if !inputs.view.contains(self.state.position.x) {
            self.state.velocity = Vec2::ZERO;
            return self.output(TickStatus::Frozen, None);
        }

        let start_velocity_x = self.state.velocity.x;
        let previous_relation_x = self.state.relation_to_destination.x;

        self.consume_destination_override();
        self.refresh_relation();

        let mut accelerating = false;
        let mut climb = None;

        if self.state.in_climb {
            climb = self.climb_step();
        } else if self.state.has_destination() {
            if self.state.relation_to_destination.x != 0.0 {
                accelerating = self.steer(dt);
                climb = self.scan_for_climb(contacts);
            } else {
                self.state.velocity.x = 0.0;
            }
        }

        let sample = ProgressSample {
            accelerating,
            relation_unchanged: same_coordinate(
                self.state.relation_to_destination.x,
                previous_relation_x,
            ),
            started_at_rest: start_velocity_x.abs() < REST_SPEED,
        };

        if self.stuck.observe(dt, sample) == StuckVerdict::Escape {
            if self.state.in_climb {
                debug!("Stuck escape skipped: a climb already started this tick");
            } else {
                climb = Some(self.escape_stuck());
            }
        }

        if inputs.body.is_none() {
            self.state.position += self.state.velocity * dt;
        }

        self.output(TickStatus::Active, climb)
    }

    fn spawn_at_root(&mut self, root: Vec2) {
        self.state.position = Vec2::new(root.x, root.y + self.tuning.half_size());
        self.state.velocity = Vec2::ZERO;
        self.state.spawned = true;
        self.refresh_relation();
        info!("Avatar spawned at {:?}", self.state.position);
    }

    fn consume_destination_override(&mut self) {
        if !self.state.has_pending_override() {
            return;
        }

        let pending = self.state.destination_override;
        // A climb keeps its vertical target; only the horizontal goal moves.
        let y = if self.state.in_climb {
            self.state.destination.y
        } else {
            pending.y
        };
        self.state.destination = Vec2::new(pending.x, y);
        self.state.destination_override = Vec2::new(NO_DESTINATION, 0.0);
        debug!("Destination override consumed: {:?}", self.state.destination);
    }

    fn refresh_relation(&mut self) {
        let tolerance = self.tuning.arrival_tolerance;
        let snap = |v: f32| if v.abs() <= tolerance { 0.0 } else { v };
        let relation = self.state.position - self.state.destination;
        self.state.relation_to_destination = Vec2::new(snap(relation.x), snap(relation.y));
    }

    /// Returns `true` when the accelerating branch was taken.
    fn steer(&mut self, dt: f32) -> bool {
        let relation_x = self.state.relation_to_destination.x;
        let toward = -relation_x.signum();
        let mut x_vel = self.state.velocity.x;

        let heading_to_destination = x_vel.signum() != relation_x.signum();
        let within_stopping = self
            .tuning
            .stopping_distance(x_vel)
            .is_some_and(|distance| relation_x.abs() <= distance);

        let accelerating = if heading_to_destination && within_stopping {
            let original_sign = x_vel.signum();
            x_vel -= toward * self.tuning.accel * dt;
            if x_vel.signum() != original_sign {
                x_vel = 0.0;
            }
            false
        } else {
            x_vel += toward * self.tuning.accel * dt;
            true
        };

        // Holds on both branches: the body may arrive faster than the cap.
        x_vel = x_vel.abs().min(self.tuning.x_vel_max) * x_vel.signum();

        // Never step past the destination within a single tick.
        if dt > 0.0 && x_vel.signum() == toward {
            let limit = relation_x.abs() / dt;
            if x_vel.abs() > limit {
                x_vel = limit * toward;
            }
        }

        self.state.velocity.x = x_vel;
        accelerating
    }

    fn scan_for_climb(&mut self, contacts: &ContactTracker) -> Option<ClimbTransition> {
        let feet = self.state.position.y - self.tuning.half_size();

        // Tops within the snap tolerance of the feet are what the avatar stands on.
        let Some(top) = contacts.highest_top_above(feet + self.tuning.arrival_tolerance) else {
            self.state.destination.y = self.state.position.y;
            return None;
        };

        let target = top + self.tuning.half_size() + self.tuning.climb_clearance;
        let extent = target - self.state.position.y;
        self.state.in_climb = true;
        self.state.destination.y = target;
        self.state.climb_extent = extent;
        info!("Climb started onto obstacle top {}: extent={}", top, extent);

        Some(ClimbTransition::Started {
            extent,
            cause: ClimbCause::Obstacle,
        })
    }

    fn climb_step(&mut self) -> Option<ClimbTransition> {
        self.state.velocity = Vec2::new(0.0, self.tuning.climb_speed);

        if self.state.relation_to_destination.y >= 0.0 {
            self.state.in_climb = false;
            self.state.climb_extent = 0.0;
            self.state.velocity = Vec2::ZERO;
            info!("Climb finished at y={}", self.state.position.y);
            return Some(ClimbTransition::Finished);
        }

        self.state.climb_extent = (-self.state.relation_to_destination.y).max(0.0);
        None
    }

    fn escape_stuck(&mut self) -> ClimbTransition {
        let extent = self.tuning.climb_clearance;
        self.state.in_climb = true;
        self.state.destination.y = self.state.position.y + extent;
        self.state.climb_extent = extent;
        info!(
            "Avatar stuck for over {}s at {:?}, forcing a climb",
            self.tuning.stuck_escape_time, self.state.position
        );

        ClimbTransition::Started {
            extent,
            cause: ClimbCause::StuckEscape,
        }
    }

    fn output(&self, status: TickStatus, climb: Option<ClimbTransition>) -> TickOutput {
        let presentation = matches!(status, TickStatus::Active | TickStatus::Spawned)
            .then(|| self.presentation());

        TickOutput {
            status,
            position: self.state.position,
            velocity: self.state.velocity,
            climb,
            presentation,
        }
    }

    fn presentation(&self) -> Presentation {
        Presentation {
            animation: AnimationParams {
                speed: self.state.velocity.x.abs(),
                in_climb: self.state.in_climb,
                climb_extent: self.state.climb_extent,
                light_toggle: self.state.light_toggle,
            },
            light: LightParams {
                light_on: self.state.light_toggle,
                facing_right: self.state.facing == Facing::Right,
            },
            flip_x: self.state.facing.flip_x(),
        }
    }
}

/// Equal up to float rounding, relative to the magnitude compared.
fn same_coordinate(a: f32, b: f32) -> bool {
    (a - b).abs() <= f32::EPSILON * a.abs().max(b.abs()).max(1.0)
}
