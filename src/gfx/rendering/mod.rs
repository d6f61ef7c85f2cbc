pub mod frame;

pub use frame::{BufferId, DrawCall, FrameRenderer, Primitive};
