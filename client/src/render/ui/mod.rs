//! UI rendering components split from the main renderer

pub mod area_banner;
mod bag;
mod battle;
pub mod common;
mod hud;
pub mod notice;
mod panel;
mod victory;
