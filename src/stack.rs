use std::collections::VecDeque;

use itertools::Itertools;

use crate::error::Result;
use crate::rank::ranks;

/// One input element. Its position is its index in the holding stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Node {
    pub value: i32,
    pub rank: usize,
}

/// Ordered sequence of nodes, index 0 being the top.
///
/// Every edit is a no-op when the stack is too small for it; the returned
/// `bool` tells whether anything moved.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Stack {
    nodes: VecDeque<Node>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: VecDeque::with_capacity(capacity),
        }
    }

    /// Builds a stack holding `values` top to bottom, ranked against each other.
    pub fn from_values(values: &[i32]) -> Result<Self> {
        let mut stack = Self::with_capacity(values.len());
        for (&value, rank) in values.iter().zip(ranks(values)?) {
            stack.push_back(Node { value, rank });
        }
        Ok(stack)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn top(&self) -> Option<&Node> {
        self.nodes.front()
    }

    pub fn get(&self, position: usize) -> Option<&Node> {
        self.nodes.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.nodes.iter().map(|n| n.value)
    }

    pub fn push_front(&mut self, node: Node) {
        self.nodes.push_front(node);
    }

    pub fn push_back(&mut self, node: Node) {
        self.nodes.push_back(node);
    }

    pub fn pop_front(&mut self) -> Option<Node> {
        self.nodes.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<Node> {
        self.nodes.pop_back()
    }

    pub fn swap_top(&mut self) -> bool {
        if self.nodes.len() < 2 {
            return false;
        }
        self.nodes.swap(0, 1);
        true
    }

    /// Top node goes to the bottom.
    pub fn rotate(&mut self) -> bool {
        if self.nodes.len() < 2 {
            return false;
        }
        self.nodes.rotate_left(1);
        true
    }

    /// Bottom node comes to the top.
    pub fn reverse_rotate(&mut self) -> bool {
        if self.nodes.len() < 2 {
            return false;
        }
        self.nodes.rotate_right(1);
        true
    }

    /// Strictly ascending from top to bottom. Trivially true below two nodes.
    pub fn is_sorted(&self) -> bool {
        self.nodes.iter().tuple_windows().all(|(a, b)| a.value < b.value)
    }

    pub fn position_of_min(&self) -> Option<usize> {
        self.nodes.iter().position_min_by_key(|n| n.rank)
    }

    pub fn position_of_max(&self) -> Option<usize> {
        self.nodes.iter().position_max_by_key(|n| n.rank)
    }
}

impl FromIterator<Node> for Stack {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn values(stack: &Stack) -> Vec<i32> {
        stack.values().collect()
    }

    #[test]
    fn builds_top_to_bottom_with_ranks() {
        let stack = Stack::from_values(&[5, -1, 3]).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Some(&Node { value: 5, rank: 2 }));
        assert_eq!(stack.get(1).map(|n| n.rank), Some(0));
        assert_eq!(stack.position_of_min(), Some(1));
        assert_eq!(stack.position_of_max(), Some(0));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Stack::from_values(&[3, 1, 3]),
            Err(Error::Duplicate { value: 3 })
        );
    }

    #[test]
    fn edits_on_small_stacks_are_noops() {
        let mut empty = Stack::new();
        assert!(!empty.swap_top());
        assert!(!empty.rotate());
        assert!(!empty.reverse_rotate());
        assert_eq!(empty.pop_front(), None);
        assert_eq!(empty.top(), None);
        assert_eq!(empty.position_of_min(), None);

        let mut single = Stack::from_values(&[7]).unwrap();
        assert!(!single.swap_top());
        assert!(!single.rotate());
        assert!(!single.reverse_rotate());
        assert_eq!(values(&single), [7]);
    }

    #[test]
    fn rotations() {
        let mut stack = Stack::from_values(&[1, 2, 3, 4]).unwrap();
        assert!(stack.rotate());
        assert_eq!(values(&stack), [2, 3, 4, 1]);
        assert!(stack.reverse_rotate());
        assert!(stack.reverse_rotate());
        assert_eq!(values(&stack), [4, 1, 2, 3]);
        assert!(stack.swap_top());
        assert_eq!(values(&stack), [1, 4, 2, 3]);
    }

    #[test]
    fn sortedness() {
        assert!(Stack::new().is_sorted());
        assert!(Stack::from_values(&[9]).unwrap().is_sorted());
        assert!(Stack::from_values(&[-4, 0, 12]).unwrap().is_sorted());
        assert!(!Stack::from_values(&[0, -4, 12]).unwrap().is_sorted());
    }
}
