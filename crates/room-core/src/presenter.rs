//! Presentation state machine for the room.
//!
//! Owns the [`SceneState`] and the [`Timeline`] that animates it. View
//! transitions (`enter_about`, `enter_projects`, `reset`) and the theme toggle
//! only start tweens and keyed follow-ups; [`Presenter::advance`] moves them
//! forward once per frame.

use crate::config::RoomConfig;
use crate::constants::*;
use crate::error::TransitionError;
use crate::manifest::SceneGraph;
use crate::orbit::OrbitController;
use crate::pick::{self, Aabb, PickAction, PickTag, Pickable, Ray};
use crate::state::{
    CameraPose, LightId, LightRig, Placard, SceneState, TextId, TextMaterial, ThemeMode, ViewMode,
};
use crate::tween::{FollowUp, Property, Timeline, Tween};
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::TAU;

// Placards are flat; give them a little depth so rays at grazing angles still hit.
const PLACARD_THICKNESS: f32 = 0.01;

pub struct Presenter {
    config: RoomConfig,
    state: SceneState,
    timeline: Timeline,
    orbit: OrbitController,
    scene_pickables: Vec<Pickable>,
    scene_attached: bool,
}

impl Presenter {
    pub fn new(config: RoomConfig) -> Self {
        let mut state = SceneState::new(config.presets.default);
        state.placards = config
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let anchor = config.layout.anchor(index);
                Placard {
                    index,
                    anchor,
                    y: anchor.y,
                    opacity: 0.0,
                    scale: 0.0,
                    has_caption: project.caption.is_some(),
                    caption_visible: false,
                }
            })
            .collect();
        let orbit = OrbitController::new(config.orbit);
        Self {
            config,
            state,
            timeline: Timeline::new(),
            orbit,
            scene_pickables: Vec::new(),
            scene_attached: false,
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// True once the primary scene graph has been attached.
    pub fn is_interactive(&self) -> bool {
        self.scene_attached
    }

    /// Bind references to the loaded room: book cover, light switch and the
    /// pickable nodes.
    pub fn attach_scene(&mut self, graph: &SceneGraph) {
        self.state.book_cover = graph.book_cover().map(|_| BOOK_CLOSED_ANGLE);
        self.state.light_switch = graph.light_switch().map(|_| switch_angle(self.state.theme));
        self.scene_pickables = graph.pickables();
        self.scene_attached = true;
        log::info!(
            "[assets] room attached: nodes={} pickables={} book_cover={} switch={}",
            graph.len(),
            self.scene_pickables.len(),
            self.state.book_cover.is_some(),
            self.state.light_switch.is_some()
        );
    }

    /// Register a text mesh once its glyphs are available, colored for the
    /// current theme.
    pub fn attach_text(&mut self, id: TextId) {
        if self.state.text(id).is_some() {
            return;
        }
        let [front, side] = id.palette(self.state.theme);
        self.state.texts.push(TextMaterial {
            id,
            faces: [Vec3::from(front), Vec3::from(side)],
        });
    }

    pub fn enter_about(&mut self) -> Result<(), TransitionError> {
        if self.state.book_cover.is_none() {
            return Err(TransitionError::AssetNotReady("book cover"));
        }
        let t = self.config.timings;
        self.begin_hold(ViewMode::About);
        self.hide_placards();
        self.move_camera(self.config.presets.about);
        self.timeline.animate(
            Property::BookCoverAngle,
            Tween::to(BOOK_OPEN_ANGLE, t.book_cover).delay(t.camera),
        );
        // dark lighting is already dim enough to read by
        if self.state.theme != ThemeMode::Dark {
            self.timeline.animate(
                Property::LightIntensity(LightId::Room),
                Tween::to(ROOM_LIGHT_READING, t.camera),
            );
        }
        self.timeline.schedule(FollowUp::ShowCloseButton, t.camera);
        log::info!("[view] -> About");
        Ok(())
    }

    pub fn enter_projects(&mut self) {
        let t = self.config.timings;
        self.begin_hold(ViewMode::Projects);
        self.close_book();
        self.move_camera(self.config.presets.projects);
        self.timeline.schedule(FollowUp::ShowCloseButton, t.camera);

        for i in 0..self.state.placards.len() {
            let delay = t.camera + i as f32 * t.placard_stagger;
            let baseline = self.state.placards[i].anchor.y;
            self.timeline
                .set(&mut self.state, Property::PlacardScale(i), 1.0);
            self.timeline.animate(
                Property::PlacardOpacity(i),
                Tween::to(1.0, t.placard_fade_in).delay(delay),
            );
            self.timeline.animate(
                Property::PlacardY(i),
                Tween::to(baseline + PLACARD_LIFT, t.placard_lift).delay(delay),
            );
            let placard = &mut self.state.placards[i];
            placard.caption_visible = placard.has_caption;
        }
        log::info!("[view] -> Projects");
    }

    /// Return to the default view from any state.
    pub fn reset(&mut self) {
        let t = self.config.timings;
        self.state.view = ViewMode::Default;
        self.state.orbit_enabled = false;
        self.close_book();
        self.hide_placards();
        self.timeline.cancel_follow_up(FollowUp::ShowCloseButton);
        self.state.close_visible = false;
        self.move_camera(self.config.presets.default);
        self.timeline.schedule(FollowUp::EnableOrbit, t.camera);
        if self.state.theme != ThemeMode::Dark {
            self.timeline.animate(
                Property::LightIntensity(LightId::Room),
                Tween::to(ROOM_LIGHT_RESTING, t.camera),
            );
        }
        log::info!("[view] -> Default");
    }

    /// Flip the theme and retarget lights, text colors and the switch.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let theme = self.state.theme.toggled();
        self.state.theme = theme;
        let d = self.config.timings.theme;

        let (room_color, ambient_color, room, ambient, glow, wall_text) = match theme {
            ThemeMode::Dark => (
                ROOM_LIGHT_NIGHT_COLOR,
                AMBIENT_NIGHT_COLOR,
                ROOM_LIGHT_NIGHT,
                AMBIENT_NIGHT,
                FAN_GLOW_DISTANCE_NIGHT,
                WALL_TEXT_LIGHT_NIGHT,
            ),
            ThemeMode::Light => (
                WHITE,
                WHITE,
                ROOM_LIGHT_DAY,
                AMBIENT_DAY,
                FAN_GLOW_DISTANCE_DAY,
                WALL_TEXT_LIGHT_DAY,
            ),
        };

        if self.state.light_switch.is_some() {
            self.timeline
                .set(&mut self.state, Property::SwitchAngle, switch_angle(theme));
        }

        let tl = &mut self.timeline;
        tl.animate(
            Property::LightColor(LightId::Room),
            Tween::to(Vec3::from(room_color), d),
        );
        tl.animate(
            Property::LightColor(LightId::Ambient),
            Tween::to(Vec3::from(ambient_color), d),
        );
        tl.animate(Property::LightIntensity(LightId::Room), Tween::to(room, d));
        tl.animate(
            Property::LightIntensity(LightId::Ambient),
            Tween::to(ambient, d),
        );
        tl.animate(
            Property::LightDistance(LightRig::NIGHT_GLOW_FAN),
            Tween::to(glow, d),
        );
        for id in LightRig::wall_text_ids() {
            tl.animate(Property::LightIntensity(id), Tween::to(wall_text, d));
        }
        for text in &self.state.texts {
            let palette = text.id.palette(theme);
            for (face, color) in palette.into_iter().enumerate() {
                tl.animate(
                    Property::TextColor(text.id, face),
                    Tween::to(Vec3::from(color), d),
                );
            }
        }
        log::info!("[theme] -> {:?}", theme);
        theme
    }

    /// Step animations and timers by `dt` seconds; returns the follow-ups
    /// that fired.
    pub fn advance(&mut self, dt: f32) -> SmallVec<[FollowUp; 2]> {
        self.spin_fans(dt);
        let fired = self.timeline.advance(dt, &mut self.state);
        for follow_up in &fired {
            match follow_up {
                FollowUp::EnableOrbit => {
                    if self.state.view == ViewMode::Default {
                        self.state.orbit_enabled = true;
                    }
                }
                FollowUp::ShowCloseButton => {
                    if self.state.view != ViewMode::Default {
                        self.state.close_visible = true;
                    }
                }
            }
        }
        fired
    }

    fn spin_fans(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let angle = self.state.fan_angle + FAN_SPIN_RAD_PER_SEC * dt;
        self.state.fan_angle = angle.rem_euclid(TAU);
    }

    /// Rotate the camera by a pointer drag; ignored while orbit is disabled.
    pub fn orbit_drag(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) -> bool {
        if !self.state.orbit_enabled {
            return false;
        }
        let (d_azimuth, d_polar) =
            OrbitController::drag_to_angles(dx_px, dy_px, viewport_height_px);
        self.release_camera();
        self.orbit.rotate(&mut self.state.camera, d_azimuth, d_polar);
        true
    }

    /// Zoom on a wheel event; positive `delta_y` moves away.
    pub fn orbit_zoom(&mut self, delta_y: f32) -> bool {
        if !self.state.orbit_enabled || delta_y == 0.0 {
            return false;
        }
        let factor = if delta_y > 0.0 {
            1.0 / ORBIT_ZOOM_STEP
        } else {
            ORBIT_ZOOM_STEP
        };
        self.release_camera();
        self.orbit.zoom(&mut self.state.camera, factor);
        true
    }

    /// Scene nodes plus currently shown placards.
    pub fn pickables(&self) -> Vec<Pickable> {
        let layout = &self.config.layout;
        let mut out = self.scene_pickables.clone();
        out.extend(
            self.state
                .placards
                .iter()
                .filter(|p| !p.is_hidden())
                .map(|p| Pickable {
                    tag: PickTag::Project(p.index),
                    bounds: Aabb::from_center_size(
                        p.position(),
                        Vec3::new(
                            layout.size.x * p.scale,
                            layout.size.y * p.scale,
                            PLACARD_THICKNESS,
                        ),
                    ),
                }),
        );
        out
    }

    /// Dispatch a click ray. Returns URLs the caller should open externally.
    pub fn handle_click(&mut self, ray: &Ray) -> SmallVec<[String; 2]> {
        let mut to_open = SmallVec::new();
        if !self.scene_attached {
            return to_open;
        }
        let hits = pick::cast(ray, &self.pickables());
        for action in pick::resolve(&hits, &self.config.projects) {
            log::debug!("[pick] {:?}", action);
            match action {
                PickAction::EnterAbout => {
                    if let Err(e) = self.enter_about() {
                        log::warn!("[pick] about ignored: {}", e);
                    }
                }
                PickAction::ToggleTheme => {
                    self.toggle_theme();
                }
                PickAction::Open(url) => to_open.push(url),
            }
        }
        to_open
    }

    // Non-default views hold the camera: orbit off, stale re-enable dropped.
    fn begin_hold(&mut self, view: ViewMode) {
        self.state.view = view;
        self.state.orbit_enabled = false;
        self.timeline.cancel_follow_up(FollowUp::EnableOrbit);
    }

    fn move_camera(&mut self, pose: CameraPose) {
        let d = self.config.timings.camera;
        self.timeline
            .animate(Property::CameraPosition, Tween::to(pose.position, d));
        self.timeline
            .animate(Property::CameraRotation, Tween::to(pose.rotation, d));
    }

    fn release_camera(&mut self) {
        self.timeline.cancel(&Property::CameraPosition);
        self.timeline.cancel(&Property::CameraRotation);
    }

    fn close_book(&mut self) {
        if self.state.book_cover.is_some() {
            self.timeline.animate(
                Property::BookCoverAngle,
                Tween::to(BOOK_CLOSED_ANGLE, self.config.timings.book_cover),
            );
        }
    }

    fn hide_placards(&mut self) {
        let fade = self.config.timings.placard_fade_out;
        for i in 0..self.state.placards.len() {
            let baseline = self.state.placards[i].anchor.y;
            self.timeline
                .animate(Property::PlacardOpacity(i), Tween::to(0.0, fade));
            self.timeline
                .animate(Property::PlacardY(i), Tween::to(baseline, fade));
            // snap flat only after the fade so no visible-but-flat frame appears
            self.timeline.animate(
                Property::PlacardScale(i),
                Tween::to(0.0, 0.0).delay(fade),
            );
            self.state.placards[i].caption_visible = false;
        }
    }
}

fn switch_angle(theme: ThemeMode) -> f32 {
    match theme {
        ThemeMode::Light => SWITCH_OFF_ANGLE,
        ThemeMode::Dark => SWITCH_ON_ANGLE,
    }
}
