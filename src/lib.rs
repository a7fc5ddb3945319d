//! Gerstner ocean library - wave population and surface animation

pub mod camera;
pub mod cli;
pub mod ocean;
pub mod params;
pub mod rendering;
