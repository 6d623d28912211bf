//! Core library: classification, tagging, normalization, cataloging.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod tags;
