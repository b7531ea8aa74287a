//! # Linear Collections
//!
//! Two small container primitives:
//!
//! 1. **`LinkedSequence`** - an ordered sequence stored as a singly linked
//!    chain of owned nodes, with positional access, insertion, deletion,
//!    search and forward iteration
//! 2. **`ArrayStack`** - a LIFO stack over a growable array
//!
//! ## Running the demos
//!
//! ```bash
//! cargo run --bin llist_demo
//! cargo run --bin llist_demo -- demo.toml
//! RUST_LOG=linear_collections=trace cargo run --bin stack_demo
//! ```
//!
//! ## Example
//!
//! ```
//! use linear_collections::LinkedSequence;
//!
//! let mut sequence = LinkedSequence::from(vec![143, 89, 4, 4, 245, 760, 17, 45]);
//! assert_eq!(sequence.max(), Ok(&760));
//! assert_eq!(sequence.index_of(&45), Some(7));
//! assert_eq!(sequence.remove_first(&4), Some(4));
//! assert_eq!(sequence.count_occurrences(&4), 1);
//! ```

pub mod array_stack;
pub mod demo_config;
pub mod error;
pub mod linked_sequence;

pub use array_stack::ArrayStack;
pub use demo_config::{DemoConfig, DemoConfigError};
pub use error::{SequenceError, StackError};
pub use linked_sequence::LinkedSequence;
