pub mod animation;

pub use animation::{AnimationDriver, FrameRenderer};
