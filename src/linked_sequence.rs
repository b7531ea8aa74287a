//! A singly linked sequence built from an exclusively owned chain of nodes.
//!
//! Every node is owned by its predecessor (the first node by the sequence),
//! so splicing a node in or out is a matter of moving `Box`es between link
//! slots. Positional operations walk the chain from the front: O(position).

use std::fmt;
use std::iter::FusedIterator;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{Result, SequenceError};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

/// Puts a new node holding `item` into `slot`, pushing the current occupant
/// one step down the chain.
fn splice<T>(slot: &mut Link<T>, item: T) {
    let next = slot.take();
    *slot = Some(Box::new(Node { item, next }));
}

/// Detaches the node in `slot` and relinks `slot` to its successor.
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    slot.take().map(|node| {
        let Node { item, next } = *node;
        *slot = next;
        item
    })
}

fn out_of_range(position: usize, len: usize) -> SequenceError {
    debug!(position, len, "positional operation rejected");
    SequenceError::OutOfRange { position, len }
}

/// Mutable ordered sequence backed by a singly linked chain.
///
/// `len` always equals the number of nodes reachable from `head`.
pub struct LinkedSequence<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedSequence<T> {
    pub fn new() -> Self {
        LinkedSequence { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks `position` links from the first node.
    fn locate(&self, position: usize) -> Result<&Node<T>> {
        if position >= self.len {
            return Err(out_of_range(position, self.len));
        }
        let mut node = self.head.as_deref();
        for _ in 0..position {
            node = node.and_then(|n| n.next.as_deref());
        }
        node.ok_or_else(|| out_of_range(position, self.len))
    }

    fn locate_mut(&mut self, position: usize) -> Result<&mut Node<T>> {
        let len = self.len;
        if position >= len {
            return Err(out_of_range(position, len));
        }
        let mut node = self.head.as_deref_mut();
        for _ in 0..position {
            node = node.and_then(|n| n.next.as_deref_mut());
        }
        node.ok_or_else(|| out_of_range(position, len))
    }

    /// The empty link slot after the last node.
    fn tail_slot(&mut self) -> &mut Link<T> {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        slot
    }

    pub fn get(&self, position: usize) -> Result<&T> {
        self.locate(position).map(|node| &node.item)
    }

    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        self.locate_mut(position).map(|node| &mut node.item)
    }

    /// Overwrites the item at `position`, handing back the previous one.
    pub fn set(&mut self, position: usize, value: T) -> Result<T> {
        let node = self.locate_mut(position)?;
        Ok(std::mem::replace(&mut node.item, value))
    }

    /// Links `item` after the current last node. No tail pointer is kept, so
    /// this walks the whole chain.
    pub fn append(&mut self, item: T) {
        splice(self.tail_slot(), item);
        self.len += 1;
        trace!(len = self.len, "appended node");
    }

    /// Inserts `item` so that it ends up at `position`; valid for
    /// `0..=len`. Items from `position` onwards shift one place back.
    pub fn insert_at(&mut self, position: usize, item: T) -> Result<()> {
        if position > self.len {
            return Err(out_of_range(position, self.len));
        }
        if position == 0 {
            splice(&mut self.head, item);
        } else {
            let prev = self.locate_mut(position - 1)?;
            splice(&mut prev.next, item);
        }
        self.len += 1;
        trace!(position, len = self.len, "spliced node into chain");
        Ok(())
    }

    /// Removes and returns the item at `position`; valid for `0..len`.
    pub fn delete_at(&mut self, position: usize) -> Result<T> {
        let len = self.len;
        if position >= len {
            return Err(out_of_range(position, len));
        }
        let removed = if position == 0 {
            unlink(&mut self.head)
        } else {
            let prev = self.locate_mut(position - 1)?;
            unlink(&mut prev.next)
        };
        let item = removed.ok_or_else(|| out_of_range(position, len))?;
        self.len -= 1;
        trace!(position, len = self.len, "unlinked node from chain");
        Ok(item)
    }

    /// Removes and returns the item at `position`, or the last item when
    /// `position` is `None`.
    pub fn pop(&mut self, position: Option<usize>) -> Result<T> {
        let len = self.len;
        let target = match position {
            Some(p) if p < len => p,
            None if len > 0 => len - 1,
            _ => {
                debug!(?position, len, "pop rejected");
                return Err(SequenceError::EmptyOrOutOfRange { position, len });
            }
        };
        self.delete_at(target)
    }

    pub fn pop_last(&mut self) -> Result<T> {
        self.pop(None)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    fn pop_front(&mut self) -> Option<T> {
        let item = unlink(&mut self.head)?;
        self.len -= 1;
        Some(item)
    }
}

impl<T: PartialEq> LinkedSequence<T> {
    /// Position of the first item equal to `item`, `None` when absent.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|x| x == item)
    }

    pub fn count_occurrences(&self, item: &T) -> usize {
        self.iter().filter(|x| *x == item).count()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Deletes the first item equal to `item`. Absence is not an error.
    pub fn remove_first(&mut self, item: &T) -> Option<T> {
        let position = self.index_of(item)?;
        self.delete_at(position).ok()
    }
}

impl<T: PartialOrd> LinkedSequence<T> {
    /// Largest item. The scan is seeded from the first item and keeps the
    /// later one on ties.
    pub fn max(&self) -> Result<&T> {
        let mut items = self.iter();
        let first = items.next().ok_or(SequenceError::EmptySequence)?;
        Ok(items.fold(first, |best, item| if best <= item { item } else { best }))
    }

    /// Smallest item, with the same seeding and tie rule as [`max`](Self::max).
    pub fn min(&self) -> Result<&T> {
        let mut items = self.iter();
        let first = items.next().ok_or(SequenceError::EmptySequence)?;
        Ok(items.fold(first, |best, item| if best >= item { item } else { best }))
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        // Unlink one node at a time; the default recursive drop can blow the
        // stack on long chains.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: a fresh chain holding clones of every item.
impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let LinkedSequence { head, len } = self;
        let mut slot = head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        for item in iter {
            slot = &mut slot.insert(Box::new(Node { item, next: None })).next;
            *len += 1;
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = LinkedSequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> From<Vec<T>> for LinkedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedSequence<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Serialize> Serialize for LinkedSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(LinkedSequence::from)
    }
}

// =============================================================================
// Cursors
// =============================================================================

/// Forward-only cursor over a sequence. Once it returns `None` it keeps
/// returning `None`; start a new pass with [`LinkedSequence::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining = self.remaining.saturating_sub(1);
            &mut node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; unlinks nodes from the front as it goes.
pub struct IntoIter<T> {
    sequence: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.sequence.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { sequence: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck_macros::quickcheck;

    #[derive(Debug, Clone)]
    enum Op {
        Append(i32),
        Insert(usize, i32),
        Delete(usize),
        Set(usize, i32),
        Pop(Option<usize>),
        RemoveFirst(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::Append),
            (0..12usize, any::<i32>()).prop_map(|(p, x)| Op::Insert(p, x)),
            (0..12usize).prop_map(Op::Delete),
            (0..12usize, any::<i32>()).prop_map(|(p, x)| Op::Set(p, x)),
            proptest::option::of(0..12usize).prop_map(Op::Pop),
            (-3..3i32).prop_map(Op::RemoveFirst),
        ]
    }

    // Applies `op` to both the sequence and a Vec model. Rejected operations
    // must leave the sequence untouched.
    fn apply(sequence: &mut LinkedSequence<i32>, model: &mut Vec<i32>, op: Op) {
        let len = model.len();
        match op {
            Op::Append(x) => {
                sequence.append(x);
                model.push(x);
            }
            Op::Insert(p, x) => {
                let result = sequence.insert_at(p, x);
                if p <= len {
                    assert_eq!(result, Ok(()));
                    model.insert(p, x);
                } else {
                    assert!(result.is_err());
                }
            }
            Op::Delete(p) => {
                let result = sequence.delete_at(p);
                if p < len {
                    assert_eq!(result, Ok(model.remove(p)));
                } else {
                    assert!(result.is_err());
                }
            }
            Op::Set(p, x) => {
                let result = sequence.set(p, x);
                if p < len {
                    assert_eq!(result, Ok(std::mem::replace(&mut model[p], x)));
                } else {
                    assert!(result.is_err());
                }
            }
            Op::Pop(position) => {
                let result = sequence.pop(position);
                match position {
                    Some(p) if p < len => assert_eq!(result, Ok(model.remove(p))),
                    None if len > 0 => assert_eq!(result, Ok(model.remove(len - 1))),
                    _ => assert!(result.is_err()),
                }
            }
            Op::RemoveFirst(x) => {
                let removed = sequence.remove_first(&x);
                match model.iter().position(|y| *y == x) {
                    Some(p) => assert_eq!(removed, Some(model.remove(p))),
                    None => assert_eq!(removed, None),
                }
            }
        }
    }

    proptest! {
        #[test]
        fn test_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut sequence = LinkedSequence::new();
            let mut model = Vec::new();
            for op in ops {
                apply(&mut sequence, &mut model, op);
                prop_assert_eq!(sequence.len(), model.len());
                prop_assert_eq!(sequence.iter().count(), model.len());
            }
            let items: Vec<i32> = sequence.iter().copied().collect();
            prop_assert_eq!(items, model);
        }

        #[test]
        fn test_insert_shifts_tail(
            items in prop::collection::vec(any::<i32>(), 0..32),
            x in any::<i32>(),
            seed in any::<usize>(),
        ) {
            let position = seed % (items.len() + 1);
            let mut sequence = LinkedSequence::from(items.clone());
            sequence.insert_at(position, x).unwrap();

            prop_assert_eq!(sequence.get(position), Ok(&x));
            for (offset, item) in items[position..].iter().enumerate() {
                prop_assert_eq!(sequence.get(position + 1 + offset), Ok(item));
            }
        }

        #[test]
        fn test_min_max_match_iterator(items in prop::collection::vec(any::<i64>(), 1..32)) {
            let sequence = LinkedSequence::from(items.clone());
            prop_assert_eq!(sequence.max(), Ok(items.iter().max().unwrap()));
            prop_assert_eq!(sequence.min(), Ok(items.iter().min().unwrap()));
        }
    }

    #[quickcheck]
    fn clone_then_mutate_leaves_original(items: Vec<u8>) -> bool {
        let original = LinkedSequence::from(items.clone());
        let mut copy = original.clone();
        copy.append(0);
        let _ = copy.delete_at(0);
        original.iter().copied().eq(items.into_iter())
    }

    #[quickcheck]
    fn count_occurrences_matches_filter(items: Vec<u8>, x: u8) -> bool {
        let sequence = LinkedSequence::from(items.clone());
        sequence.count_occurrences(&x) == items.iter().filter(|y| **y == x).count()
    }
}
