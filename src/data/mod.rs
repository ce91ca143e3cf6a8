/// Data layer: core types, loading, and the filter / aggregate / rank pipeline.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table (validated once)
///   └──────────┘
///        │
///        ├────────────────────────────┐
///        ▼                            ▼
///   ┌──────────┐                 ┌───────────┐
///   │  filter   │  category,     │ aggregate  │  group means → GroupSummary
///   │           │  first/last N  └───────────┘
///   └──────────┘                      │
///        │                            ▼
///        │                       ┌──────────┐
///        │                       │   rank    │  argmax / argmin / best rows
///        │                       └──────────┘
///        ▼                            ▼
///   ┌─────────────────────────────────────┐
///   │  report  →  UI                       │
///   └─────────────────────────────────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod rank;
pub mod report;
pub mod stats;
