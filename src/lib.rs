//! Generic sequence containers over explicitly managed storage.
//!
//! This crate provides four containers that share one structural contract:
//! an injected allocator strategy supplies raw, uninitialized storage, and
//! the container alone constructs and destroys the elements living in it.
//! The storage itself carries no element lifecycle — a buffer can be
//! over-provisioned without any live values existing in the spare slots, and
//! a node can change owners without its element being touched.
//!
//! # Containers
//!
//! | Container | Layout | Signature operations |
//! |-----------|--------|----------------------|
//! | [`GrowableArray`] | contiguous, reallocating | O(1) index, amortized O(1) `push_back` |
//! | [`RingBuffer`] | contiguous, fixed capacity | O(1) pushes/pops both ends, O(1) `rotate` |
//! | [`LinkedSequence`] | doubly linked nodes | O(1) `insert`/`erase`, O(k) `splice`, stable `sort` |
//! | [`ForwardSequence`] | singly linked nodes | forward-only subset of the above |
//!
//! # Quick start
//!
//! ```
//! use linear_collections::{GrowableArray, RingBuffer};
//!
//! let mut values: GrowableArray<u64> = GrowableArray::new();
//! values.push_back(3);
//! values.push_back(1);
//! assert_eq!(values.len(), 2);
//!
//! let mut window: RingBuffer<u64> = RingBuffer::with_capacity(2);
//! window.try_push_back(10).unwrap();
//! window.try_push_back(20).unwrap();
//! assert!(window.try_push_back(30).is_err()); // fixed capacity
//! window.rotate(1);
//! assert_eq!(window.at(0), Ok(&20));
//! ```
//!
//! # Allocator strategies
//!
//! Every container takes a [`RawAlloc`] strategy as a defaulted type
//! parameter, with a `_in` constructor to supply one explicitly. [`Global`]
//! (the process heap) is the default. A strategy hands out raw blocks; all
//! construct/destroy decisions stay in the container, which is what makes
//! growth rollback and node ownership transfer expressible at all.
//!
//! ```
//! use linear_collections::{Global, GrowableArray};
//!
//! let values: GrowableArray<u8, Global> = GrowableArray::new_in(Global);
//! assert!(values.is_empty());
//! ```
//!
//! # Failure reporting
//!
//! Every failure is synchronous and observable only through the failing
//! call's result: checked access returns [`OutOfRange`], ring pushes at
//! capacity return [`Full`] carrying the rejected value, list erasure at the
//! end returns [`InvalidPosition`], and fallible reservation returns
//! [`AllocError`] with the container untouched. Pops and end access on empty
//! containers return `None`.
//!
//! # Threading
//!
//! These are single-threaded value types: no internal synchronization, no
//! blocking, no cancellation. They are `Send`/`Sync` when their element and
//! strategy types are, in the usual owning-container sense; sharing one
//! instance across threads for mutation requires external locking.

#![warn(missing_docs)]

pub mod alloc;
pub mod array;
pub mod error;
pub mod forward;
pub mod list;
pub mod ring;

mod raw;

pub use alloc::{AllocError, Global, RawAlloc};
pub use array::GrowableArray;
pub use error::{Full, InvalidPosition, OutOfRange};
pub use forward::ForwardSequence;
pub use list::{Cursor, LinkedSequence, Position};
pub use ring::RingBuffer;
