/// Data layer: image model and raw file loading.
///
/// Architecture:
/// ```text
///   image.bin  (784 × f32, native endian)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  bytes → RawBuffer → length check
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ ImageGrid │  28×28, row-major, values untouched
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
