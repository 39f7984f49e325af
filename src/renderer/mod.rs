//! Rendering module
//!
//! Entities draw into a `DrawList` of flat-colored triangles; the WebGPU
//! pipeline uploads it once per frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawList, draw_game};
pub use vertex::Vertex;
