pub mod config;
pub mod constants;
pub mod error;
pub mod images;
pub mod manifest;
pub mod orbit;
pub mod particles;
pub mod pick;
pub mod presenter;
pub mod state;
pub mod tween;

pub use config::*;
pub use error::*;
pub use images::{decode_placard_image, PlacardImage};
pub use manifest::{SceneGraph, SceneNode, Surface};
pub use orbit::OrbitController;
pub use particles::ParticleField;
pub use pick::{PickAction, PickTag, Pickable, Ray};
pub use presenter::Presenter;
pub use state::*;
pub use tween::{FollowUp, Property, Timeline, Tween};
