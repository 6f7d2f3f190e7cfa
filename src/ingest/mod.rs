/// Data ingestion for the incident analytics service.
///
/// Submodules:
/// - `medicina_legal` — loader & cleaner for the "Presuntos Suicidios"
///   CSV export.

pub mod medicina_legal;

pub use medicina_legal::load;
