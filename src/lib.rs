//! skillaudit - audit OpenCode skills for quality, necessity, and compliance
//!
//! Each `SKILL.md` found in the global and project skill collections is
//! parsed, scored on three axes (metadata, quality, necessity) and given a
//! KEEP / UPGRADE / DELETE verdict.

pub mod analysis;
pub mod audit;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod frontmatter;
pub mod models;
pub mod reporters;
pub mod scoring;
