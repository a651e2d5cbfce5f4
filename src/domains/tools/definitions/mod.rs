//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod common;
pub mod fetch_posts;
pub mod morning_icebreaker;
pub mod udm_agendas;

pub use fetch_posts::{FetchPostsTool, Post, PostsResponse};
pub use morning_icebreaker::MorningIcebreakerTool;
pub use udm_agendas::UdmAgendasTool;
