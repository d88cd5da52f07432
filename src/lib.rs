//! purpleline - Purple Line newsletter editor backend
//!
//! Keeps the newsletter's content model on disk, renders it into the domestic
//! and international emails and the web archive fragment, and serves the
//! small set of HTTP endpoints the browser editor saves through.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PurpleLineError;
