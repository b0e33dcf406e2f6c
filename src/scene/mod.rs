pub mod camera;
pub mod gem;
pub mod lighting;
pub mod quad;
pub mod state;

pub use camera::{DepthOscillator, Projection};
pub use lighting::Lighting;
pub use state::{SceneCallbacks, SceneKey, SceneState};
