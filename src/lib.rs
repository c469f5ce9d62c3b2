//! # Claude Menubar
//!
//! A SwiftBar plugin that shows claude.ai usage-window utilization in the
//! menu bar.
//!
//! ## Overview
//!
//! Each run is a single pass: read the credentials file from
//! `~/.config/menubar-utils/claude-usage.env`, issue one authenticated GET
//! against the claude.ai usage endpoint, and print SwiftBar menu text for
//! whatever happened:
//! - Status-bar label with session/weekly utilization percentages
//! - Dropdown lines with time until each window resets
//! - Actionable setup/recovery menus for every failure mode
//!
//! Every outcome exits zero. The plugin host re-runs the binary on its own
//! schedule, so a failed run renders instructions instead of crashing.

/// Command-line argument parsing and configuration
pub mod cli;

/// Credentials file resolution and parsing
pub mod config;

/// SwiftBar menu rendering for every run outcome
pub mod display;

/// Usage endpoint client and outcome classification
pub mod usage_api;
