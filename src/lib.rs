//! skiprank - a rank-indexed skip list.
//!
//! An in-memory map that keeps entries ordered by a numeric score and
//! answers three kinds of queries: by key (O(1) hash lookup), by rank
//! (i-th smallest score), and by score range - both in expected O(log n)
//! thanks to per-link skip counts maintained across the rows.
//!
//! # Quick Start
//!
//! ```
//! use skiprank::SkipList;
//!
//! let mut board = SkipList::new();
//! board.put("alice", "Alice", 10.0).unwrap();
//! board.put("bob", "Bob", 20.0).unwrap();
//! board.put("chuck", "Chuck", 30.0).unwrap();
//!
//! // By key, by rank, by score.
//! assert_eq!(board.get("bob"), Some(&"Bob"));
//! assert_eq!(board.at(0).unwrap(), Some(&"Alice"));
//! assert_eq!(board.index_of_score(25.0).unwrap(), 2);
//!
//! let mid: Vec<_> = board.range_by_score(15.0, 35.0).unwrap().collect();
//! assert_eq!(mid, [&"Bob", &"Chuck"]);
//! ```
//!
//! The list is single-threaded; wrap it in a lock to share it across
//! threads.

pub mod error;
mod level;
mod list;
mod node;
mod trace;

pub use error::{Error, Result};
pub use list::{Range, SkipList};
