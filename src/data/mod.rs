/// Data layer: the uploaded table, CSV parsing and CSV encoding.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → Dataset (cells kept verbatim)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  columns + rows, feature extraction
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  augmented Dataset → UTF-8 CSV bytes
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
