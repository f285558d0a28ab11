//! Error types and diagnostics for the front-end.
//!
//! This module defines the diagnostics produced by the three stages:
//!
//! - Non-fatal lexical warnings (scanning continues past them)
//! - Fatal parse and semantic errors with source position information
//! - Taxonomy names for each fault kind
//! - Display formatting of the single user-visible diagnostic string

pub mod errors;
