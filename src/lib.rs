//! Core library for the contact-mapper command line application.
//!
//! The library turns a contact export into the mailing-list layout a print
//! vendor expects. IO adapters live under [`io`], row representations inside
//! [`model`], the per-field cleanup rules in [`normalize`], and the pipeline
//! that ties them together under [`mapper`]. [`names`] holds a standalone
//! helper for splitting combined household names.

pub mod config;
pub mod error;
pub mod io;
pub mod mapper;
pub mod model;
pub mod names;
pub mod normalize;

pub use error::{MapperError, Result};
