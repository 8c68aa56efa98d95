pub mod animation;
pub mod assets;
pub mod camera;
pub mod config;
pub mod driver;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod simulation;

pub use game::Game;
