//! HP/Aruba to Cisco IOS switch configuration conversion tool.
//!
//! The translation itself lives in `switchcfg-core`. This crate adds what the
//! command-line front end needs around it:
//!
//! - [`profile`]: named TOML render profiles that fix target interface naming
//! - [`report`]: terminal-friendly rendering of parsed models and summaries
//!
//! # Examples
//!
//! ```ignore
//! use hp2cisco::profile::resolve_profile;
//! use switchcfg_core::translate_with;
//!
//! let (profile, _) = resolve_profile(Some("ios-gigabit"), None)?;
//! let translation = translate_with(&source, &profile.render)?;
//! println!("{}", translation.text);
//! ```

pub mod profile;
pub mod report;
