//! poreport - translation coverage report for gettext PO catalogs
//!
//! poreport is a CLI tool and library that scans a folder of `.po` files,
//! classifies every translation string as translated, untranslated or not
//! allowed (rejected by a markup-safety policy), and prints one row per file
//! plus a totals row that always stays last, whatever the sort order.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and folder validation
//! - `core`: Core reporting engine (scan, classify, aggregate, sort)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
