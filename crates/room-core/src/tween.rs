//! Time-sliced property animation with "last one started wins" semantics.
//!
//! Every animated value is addressed by a [`Property`]. Starting a tween on a
//! property replaces whatever was running or waiting on it, so a superseding
//! transition never races a stale one. Delayed follow-up actions are keyed the
//! same way and can be cancelled.

use crate::state::{LightId, SceneState, TextId};
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    CameraPosition,
    CameraRotation,
    BookCoverAngle,
    SwitchAngle,
    LightIntensity(LightId),
    LightColor(LightId),
    LightDistance(LightId),
    TextColor(TextId, usize),
    PlacardOpacity(usize),
    PlacardY(usize),
    PlacardScale(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f32),
    Vec3(Vec3),
}

impl Value {
    pub fn lerp(self, to: Value, t: f32) -> Value {
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(a + (b - a) * t),
            (Value::Vec3(a), Value::Vec3(b)) => Value::Vec3(a.lerp(b, t)),
            // mismatched kinds cannot blend; jump to the target
            (_, to) => to,
        }
    }

    pub fn as_scalar(self) -> Option<f32> {
        match self {
            Value::Scalar(v) => Some(v),
            Value::Vec3(_) => None,
        }
    }

    pub fn as_vec3(self) -> Option<Vec3> {
        match self {
            Value::Vec3(v) => Some(v),
            Value::Scalar(_) => None,
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Vec3(v)
    }
}

impl Property {
    /// Current value, or `None` when the target does not exist (yet).
    pub fn read(&self, state: &SceneState) -> Option<Value> {
        match *self {
            Property::CameraPosition => Some(state.camera.position.into()),
            Property::CameraRotation => Some(state.camera.rotation.into()),
            Property::BookCoverAngle => state.book_cover.map(Value::Scalar),
            Property::SwitchAngle => state.light_switch.map(Value::Scalar),
            Property::LightIntensity(id) => state.lights.get(id).map(|l| l.intensity.into()),
            Property::LightColor(id) => state.lights.get(id).map(|l| l.color.into()),
            Property::LightDistance(id) => state.lights.get(id).map(|l| l.distance.into()),
            Property::TextColor(id, face) => state
                .text(id)
                .and_then(|t| t.faces.get(face))
                .map(|c| Value::Vec3(*c)),
            Property::PlacardOpacity(i) => state.placards.get(i).map(|p| p.opacity.into()),
            Property::PlacardY(i) => state.placards.get(i).map(|p| p.y.into()),
            Property::PlacardScale(i) => state.placards.get(i).map(|p| p.scale.into()),
        }
    }

    /// Write `value`; returns false when the target is missing or the kind mismatches.
    pub fn write(&self, state: &mut SceneState, value: Value) -> bool {
        match (*self, value) {
            (Property::CameraPosition, Value::Vec3(v)) => {
                state.camera.position = v;
                true
            }
            (Property::CameraRotation, Value::Vec3(v)) => {
                state.camera.rotation = v;
                true
            }
            (Property::BookCoverAngle, Value::Scalar(v)) => match state.book_cover.as_mut() {
                Some(angle) => {
                    *angle = v;
                    true
                }
                None => false,
            },
            (Property::SwitchAngle, Value::Scalar(v)) => match state.light_switch.as_mut() {
                Some(angle) => {
                    *angle = v;
                    true
                }
                None => false,
            },
            (Property::LightIntensity(id), Value::Scalar(v)) => state
                .lights
                .get_mut(id)
                .map(|l| l.intensity = v)
                .is_some(),
            (Property::LightColor(id), Value::Vec3(v)) => {
                state.lights.get_mut(id).map(|l| l.color = v).is_some()
            }
            (Property::LightDistance(id), Value::Scalar(v)) => {
                state.lights.get_mut(id).map(|l| l.distance = v).is_some()
            }
            (Property::TextColor(id, face), Value::Vec3(v)) => state
                .texts
                .iter_mut()
                .find(|t| t.id == id)
                .and_then(|t| t.faces.get_mut(face))
                .map(|c| *c = v)
                .is_some(),
            (Property::PlacardOpacity(i), Value::Scalar(v)) => {
                state.placards.get_mut(i).map(|p| p.opacity = v).is_some()
            }
            (Property::PlacardY(i), Value::Scalar(v)) => {
                state.placards.get_mut(i).map(|p| p.y = v).is_some()
            }
            (Property::PlacardScale(i), Value::Scalar(v)) => {
                state.placards.get_mut(i).map(|p| p.scale = v).is_some()
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    #[default]
    QuadOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    target: Value,
    from: Option<Value>,
    delay: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    pub fn to(target: impl Into<Value>, duration: f32) -> Self {
        Self {
            target: target.into(),
            from: None,
            delay: 0.0,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn target(&self) -> Value {
        self.target
    }

    /// Seconds until the tween lands, counting any remaining delay.
    pub fn remaining(&self) -> f32 {
        (self.delay + self.duration - self.elapsed).max(0.0)
    }

    /// Step by `dt`; returns true once finished (or the target vanished).
    fn step(&mut self, property: &Property, state: &mut SceneState, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.delay {
            return false;
        }
        // start values are captured when the delay elapses
        let from = match self.from {
            Some(v) => v,
            None => match property.read(state) {
                Some(v) => {
                    self.from = Some(v);
                    v
                }
                None => return true,
            },
        };
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            ((self.elapsed - self.delay) / self.duration).min(1.0)
        };
        let value = if progress >= 1.0 {
            self.target
        } else {
            from.lerp(self.target, self.ease.apply(progress))
        };
        if !property.write(state, value) {
            return true;
        }
        progress >= 1.0
    }
}

/// Delayed one-shot actions scheduled alongside tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FollowUp {
    EnableOrbit,
    ShowCloseButton,
}

#[derive(Default, Debug)]
pub struct Timeline {
    tweens: FnvHashMap<Property, Tween>,
    timers: FnvHashMap<FollowUp, f32>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween` on `property`, overwriting any tween already there.
    pub fn animate(&mut self, property: Property, tween: Tween) {
        self.tweens.insert(property, tween);
    }

    /// Cancel anything pending on `property` and write `value` now.
    pub fn set(&mut self, state: &mut SceneState, property: Property, value: impl Into<Value>) {
        self.tweens.remove(&property);
        property.write(state, value.into());
    }

    pub fn cancel(&mut self, property: &Property) {
        self.tweens.remove(property);
    }

    /// Fire `follow_up` after `delay` seconds, replacing an earlier schedule.
    pub fn schedule(&mut self, follow_up: FollowUp, delay: f32) {
        self.timers.insert(follow_up, delay.max(0.0));
    }

    pub fn cancel_follow_up(&mut self, follow_up: FollowUp) {
        self.timers.remove(&follow_up);
    }

    pub fn is_animating(&self, property: &Property) -> bool {
        self.tweens.contains_key(property)
    }

    pub fn tween(&self, property: &Property) -> Option<&Tween> {
        self.tweens.get(property)
    }

    pub fn is_pending(&self, follow_up: FollowUp) -> bool {
        self.timers.contains_key(&follow_up)
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.timers.is_empty()
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Advance every tween and timer by `dt` seconds, returning the follow-ups
    /// that came due in this step (ordered by key).
    pub fn advance(&mut self, dt: f32, state: &mut SceneState) -> SmallVec<[FollowUp; 2]> {
        let dt = dt.max(0.0);
        self.tweens
            .retain(|property, tween| !tween.step(property, state, dt));

        let mut fired = SmallVec::new();
        self.timers.retain(|follow_up, remaining| {
            *remaining -= dt;
            if *remaining <= 0.0 {
                fired.push(*follow_up);
                false
            } else {
                true
            }
        });
        fired.sort();
        fired
    }
}
