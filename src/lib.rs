//! Sequence containers with explicit growth and ownership semantics.
//!
//! This crate provides two base containers and thin adapters over them:
//!
//! | Container | Storage | Key operations |
//! |-----------|---------|----------------|
//! | [`Vector`] | contiguous buffer | O(1) amortized push, O(n) insert/remove |
//! | [`List`] | linked nodes | O(1) push/pop at both ends, O(1) append/splice relink |
//! | [`Stack`] | adapter over `Vector` | LIFO push/pop/top |
//! | [`Queue`] | adapter over `List` | FIFO push/pop/front/back |
//! | [`Array`] | inline `[T; N]` | fixed size, no growth |
//!
//! The hard parts live in the base containers: manual buffer growth with
//! element relocation for [`Vector`], and link-level node surgery
//! (insert, erase, splice, append, reverse, dedup) for [`List`]. The
//! adapters add no state and no invariants of their own.
//!
//! # Quick Start
//!
//! ```
//! use strand_collections::{List, Vector};
//!
//! let mut v: Vector<u32> = Vector::new();
//! v.push(1);
//! v.push(2);
//! v.insert(1, 9).unwrap();
//! assert_eq!(v.as_slice(), &[1, 9, 2]);
//!
//! let mut a: List<u32> = [1, 2, 3].into_iter().collect();
//! let mut b: List<u32> = [4, 5, 6].into_iter().collect();
//! a.splice(1, &mut b).unwrap();
//! assert!(b.is_empty());
//! assert!(a.iter().eq(&[1, 4, 5, 6, 2, 3]));
//! ```
//!
//! # Growth
//!
//! [`Vector`] doubles its capacity whenever an insert would exceed it,
//! which keeps a sequence of appends at O(1) amortized cost per element.
//! Capacity never shrinks except through
//! [`shrink_to_fit`](Vector::shrink_to_fit).
//!
//! # Ownership
//!
//! Every container owns its storage outright. [`List::append`] and
//! [`List::splice`] transfer whole node chains between lists in O(1) by
//! relinking; no node is ever copied or shared between two lists.
//!
//! # Errors
//!
//! Positional operations return [`Error::OutOfBounds`]; capacity
//! requests past the per-type maximum return
//! [`Error::CapacityOverflow`]. Empty-container conditions surface as
//! `None` from `front`/`back`/`pop` on every container. A failed
//! operation leaves the container exactly as it was.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Vector`] and [`List`] as
//!   element sequences.

#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod list;
pub mod queue;
pub mod stack;
pub mod vector;

#[cfg(feature = "serde")]
mod serde;

pub use array::Array;
pub use error::Error;
pub use list::List;
pub use queue::Queue;
pub use stack::Stack;
pub use vector::Vector;
