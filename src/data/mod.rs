/// Data layer: core types, loading, normalization and partitioning.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ObservationTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  pixel frame → unit square (new table)
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ partition  │  covariate > threshold / < threshold
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod partition;
pub mod transform;
