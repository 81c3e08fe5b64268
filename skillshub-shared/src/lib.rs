//! Shared data models for the SkillsHub web client.
//!
//! Everything the frontend exchanges with the SkillsHub REST API lives here:
//! users, skills, orders, auth payloads, preferences, the canonical paginated
//! page envelope, and the API error type.

pub mod models;
