//! AI Fashion Stylist: a terminal page that collects a clothing item, color,
//! style tags and gender, asks a recommendation backend for outfits and
//! shows whatever comes back.

pub mod client;
pub mod command;
pub mod config;
pub mod form;
pub mod models;
pub mod notify;
pub mod page;
pub mod render;
pub mod submission;
pub mod vocab;
