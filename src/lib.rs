pub mod config;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod session;
pub mod snake;
pub mod term;

pub type GridInt = i16;
pub type Coords = (GridInt, GridInt);
