//! HTTP service fronting an external image generation/editing provider.
//!
//! Two operations are exposed: create an image from a text prompt, and edit
//! an uploaded image according to a prompt. Results are returned inline as
//! base64 data URLs.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod services;
pub mod startup;
