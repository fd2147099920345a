pub mod charge;
pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod controller;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
