//! Analytical core for the Colombia suicide incident dashboard.
//!
//! Data flows one way: the Medicina Legal "Presuntos Suicidios" CSV
//! export is loaded and cleaned once (`ingest`), and every view the
//! presentation layer renders is a pure function of the resulting
//! immutable [`model::Dataset`] (`analysis`, coordinated by
//! [`dashboard::build`]). The rendering layer consumes the computed
//! aggregates verbatim and never mutates the table; its only inputs back
//! into the core are the filter selections of
//! [`analysis::reasons::top_reasons`] and the department selector of
//! [`analysis::geographic::department_series`].

pub mod analysis;
pub mod columns;
pub mod config;
pub mod dashboard;
pub mod ingest;
pub mod logging;
pub mod model;
