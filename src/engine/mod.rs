// Engine modules: assets, clock, input, physics, renderer

pub mod assets;
pub mod clock;
pub mod input;
pub mod physics;
pub mod renderer;
