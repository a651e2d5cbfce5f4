//! Domains module containing the server's tools and prompts.

pub mod prompts;
pub mod tools;
