/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv
///    │
///    ▼
///   ┌──────────┐
///   │  loader   │  parse file → AccidentDataset
///   └──────────┘
///    │
///    ▼
///   ┌─────────────────┐
///   │ AccidentDataset  │  Vec<AccidentRecord>, column index
///   └─────────────────┘
///    │
///    ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ───▶ │ aggregate   │  year/cause predicates → counts
///   └──────────┘      └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod aggregate;
