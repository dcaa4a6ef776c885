mod canvas;
mod component;
mod mst;
mod render;
mod rng;
mod state;
mod types;

pub use component::MeshCanvas;
