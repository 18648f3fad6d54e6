//! # Mandhi Town
//!
//! Core toolkit for the "Best Mandhi in Town" restaurant directory. Two
//! independent engines do the real work; everything else is plumbing around
//! them:
//!
//! - **Ranking pipeline** — filter → weighted score → stable sort over
//!   restaurant records, with the selection round-tripped through a
//!   shareable URL query string.
//! - **Avatar transform** — pan/zoom/crop of a user photo into a fixed
//!   512×512 JPEG, driven by a pure gesture reducer and placement math.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Record types matching the directory API's JSON payloads |
//! | [`catalog`] | Dataset loading, validation, and arrival lifecycle |
//! | [`ranking`] | Filter, weighted scoring, stable sorts, leaderboard view |
//! | [`query`] | Filter state ↔ URL query-string codec |
//! | [`avatar`] | Crop geometry, gesture reducer, editing session, JPEG render |
//! | [`storage`] | Injectable key-value persistence for session state |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Pure Cores, Injected Edges
//!
//! The ranking functions are pure over `(records, state)` and the avatar
//! geometry is pure over `(dimensions, crop)`. I/O lives at the edges: the
//! [`avatar::AvatarBackend`] trait owns pixels, the [`storage::StoragePort`]
//! trait owns persistence. Tests run the full logic against mocks without
//! touching a filesystem or decoding an image.
//!
//! ## One Placement Math for Preview and Output
//!
//! The avatar's on-screen preview and its saved 512×512 output share
//! [`avatar::plan_render`], parameterized only by the output side. Whatever
//! viewport size a frontend picks, what the user positions is exactly what
//! gets encoded.
//!
//! ## Weights Are Business Rules, Labels Are Data
//!
//! The 80/20 rating/review-volume split is a fixed rule and lives as
//! constants in [`ranking`]. The category labels users filter by are
//! deployment data and live in [`config`] — a site serving another cuisine
//! swaps the list without touching the matching code.
//!
//! ## Pure-Rust Imaging
//!
//! The avatar backend uses the `image` crate end to end — decode, Lanczos3
//! resize, composite, JPEG encode — so the binary is fully self-contained:
//! no system libraries, no external converters.

pub mod avatar;
pub mod catalog;
pub mod config;
pub mod output;
pub mod query;
pub mod ranking;
pub mod storage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
