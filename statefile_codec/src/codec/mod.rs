//! # Field stream format
//!
//! A persisted model is a flat concatenation of fields in call order. Each
//! field is a scalar, a string, or a composite built recursively out of
//! other fields. No padding, no alignment, no endianness conversion; scalar
//! bit patterns are whatever the writer's platform produces.
//!
//! The below pseudocode depicts the binary representations.
//!
//! ```text
//! struct Scalar<T> {
//!     bits:   [u8; size_of::<T>()],
//! }
//!
//! struct Str {
//!     byte_count:     u64,
//!     bytes:          [u8; byte_count],
//! }
//!
//! struct Seq<T> / Set<T> / Heap<T> {
//!     element_count:  u64,
//!     element_0:      T,
//!     element_1:      T,
//!     ...
//! }
//!
//! struct Pair<F, S> {
//!     // (Notice, no element_count here.)
//!     first:          F,
//!     second:         S,
//! }
//!
//! struct Map<K, V> {
//!     entry_count:    u64,
//!     key_0:          K,
//!     value_0:        V,
//!     key_1:          K,
//!     value_1:        V,
//!     ...
//! }
//! ```
//!
//! Set elements are written in the set's canonical sorted order; heap
//! elements in priority-descending pop order. Readers rebuild containers
//! from the element stream alone.
//!
//! Text mode is a parallel, write-only rendering of the same traversal:
//! one `label = value` line (or templated fragment) per field, with
//! synthesized sub-labels (`L.size()`, `L[i]`, `L.first`, `L.second`,
//! `L.key<i>`, `L[<key>]`) delimiting composites. Nothing in text mode is
//! ever read back.

mod containers;
mod field;
mod lengths;
mod primitive;
mod text;

mod field_test;

pub use field::*;
pub use lengths::*;
use primitive::*;
pub use text::*;
