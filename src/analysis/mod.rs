/// Aggregation pipeline for the incident dataset.
///
/// Every function in this module tree is a pure derivation over the
/// immutable `Dataset`: no view mutates another, and the fixed views can
/// be computed in any order. The one reactive derivation is
/// `reasons::top_reasons`, recomputed per filter selection by the
/// presentation layer.
///
/// Submodules:
/// - `categorical` — grouped counts and shares over one or two fields.
/// - `summary` — headline dataset statistics.
/// - `temporal` — yearly series, headline indicators and total variation.
/// - `geographic` — department × year breakdown and selection universe.
/// - `reasons` — the filterable top-reasons view.

pub mod categorical;
pub mod geographic;
pub mod reasons;
pub mod summary;
pub mod temporal;
