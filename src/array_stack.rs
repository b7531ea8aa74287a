//! LIFO stack over a growable `Vec`. The top of the stack is the end of the
//! vector.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StackError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        ArrayStack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArrayStack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Places `item` on top of the stack. Amortized O(1).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or_else(|| {
            debug!("pop on empty stack");
            StackError::EmptyStack
        })
    }

    /// Returns the top item without removing it.
    pub fn top(&self) -> Result<&T, StackError> {
        self.items.last().ok_or_else(|| {
            debug!("top on empty stack");
            StackError::EmptyStack
        })
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}>", self.items.iter().join(", "))
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayStack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = ArrayStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_top_does_not_remove() {
        let mut stack = ArrayStack::with_capacity(4);
        stack.push("bottom");
        stack.push("top");
        assert_eq!(stack.top(), Ok(&"top"));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack: ArrayStack<i32> = ArrayStack::new();
        assert_eq!(stack.pop(), Err(StackError::EmptyStack));
        assert_eq!(stack.top(), Err(StackError::EmptyStack));
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn test_iter_bottom_to_top() {
        let stack: ArrayStack<i32> = (1..=3).collect();
        let items: Vec<_> = stack.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(stack.to_string(), "[1, 2, 3>");
    }

    #[test]
    fn test_serde_as_plain_array() {
        let mut stack = ArrayStack::new();
        stack.extend(vec![5, 6]);
        let json = serde_json::to_string(&stack).unwrap();
        assert_eq!(json, "[5,6]");

        let mut parsed: ArrayStack<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.pop(), Ok(6));
    }
}
