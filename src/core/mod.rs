//! Low-level primitives shared by the engines.
//!
//! - [`table`]: a flat, push/pop-able Cayley table with guarded lookups for partial tables.
//! - [`pair`]: elements of `Zm × Zn` and a membership bitmap over them.
//! - [`subgroup`]: canonical (sorted, deduplicated) subsets of `Zm × Zn`.

pub mod pair;
pub mod subgroup;
pub mod table;
