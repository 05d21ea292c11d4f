// Resume intake: PDF upload + analysis, builder drafts, templates.
// Handlers only shuttle bytes; analysis lives in crate::analysis.

pub mod builder;
pub mod extract;
pub mod handlers;
