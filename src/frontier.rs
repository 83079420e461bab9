/*!
# Traversal Frontiers

A [`Frontier`] stores the "to be visited" nodes of a graph search. The removal
discipline is the *only* axis of variation between implementations and fully
determines the traversal order:

- [`Stack`] -> LIFO semantics -> **DFS**
- [`Queue`] -> FIFO semantics -> **BFS**

The search algorithm in [`crate::search`] is written once, generically over
this trait, and never inspects which discipline it was given.
*/

use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// Removal follows the pattern of [`Frontier::try_remove`] as the fallible
/// primitive and [`Frontier::remove`] as the panicking shorthand: a correct
/// search loop checks [`Frontier::is_empty`] before every removal, so the
/// panic is only reachable through direct misuse of a frontier.
pub trait Frontier<T> {
    /// Creates a new empty frontier.
    fn new() -> Self;

    /// Inserts an element into the frontier. Always succeeds.
    fn add(&mut self, item: T);

    /// Removes and returns the next element chosen by the discipline,
    /// or `None` if the frontier is empty.
    fn try_remove(&mut self) -> Option<T>;

    /// Removes and returns the next element chosen by the discipline.
    ///
    /// # Panics
    /// Panics if the frontier is empty.
    fn remove(&mut self) -> T {
        match self.try_remove() {
            Some(item) => item,
            None => panic!("removed from an empty frontier"),
        }
    }

    /// Returns the number of elements currently in the frontier.
    fn len(&self) -> usize;

    /// Returns *true* if the frontier holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A LIFO frontier: [`Frontier::remove`] returns the most recently added
/// element not yet removed. Drives depth-first traversal.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Frontier<T> for Stack<T> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn try_remove(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        <Self as Frontier<T>>::new()
    }
}

/// A FIFO frontier: [`Frontier::remove`] returns the least recently added
/// element not yet removed. Drives breadth-first traversal.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Frontier<T> for Queue<T> {
    fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn try_remove(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        <Self as Frontier<T>>::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        for x in ['a', 'b', 'c'] {
            stack.add(x);
        }

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.remove(), 'c');
        assert_eq!(stack.remove(), 'b');
        assert_eq!(stack.remove(), 'a');
        assert!(stack.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        for x in ['a', 'b', 'c'] {
            queue.add(x);
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.remove(), 'a');
        assert_eq!(queue.remove(), 'b');
        assert_eq!(queue.remove(), 'c');
        assert!(queue.is_empty());
    }

    #[test]
    fn fresh_frontiers_are_empty() {
        let mut stack = Stack::<u32>::new();
        let mut queue = Queue::<u32>::new();

        assert!(stack.is_empty() && stack.len() == 0);
        assert!(queue.is_empty() && queue.len() == 0);
        assert_eq!(stack.try_remove(), None);
        assert_eq!(queue.try_remove(), None);
    }

    #[test]
    #[should_panic(expected = "removed from an empty frontier")]
    fn empty_stack_removal_panics() {
        Stack::<u32>::new().remove();
    }

    #[test]
    #[should_panic(expected = "removed from an empty frontier")]
    fn empty_queue_removal_panics() {
        Queue::<u32>::new().remove();
    }

    #[test]
    fn interleaved_operations() {
        let mut stack = Stack::new();
        let mut queue = Queue::new();

        stack.add(1);
        stack.add(2);
        assert_eq!(stack.remove(), 2);
        stack.add(3);
        assert_eq!(stack.remove(), 3);
        assert_eq!(stack.remove(), 1);

        queue.add(1);
        queue.add(2);
        assert_eq!(queue.remove(), 1);
        queue.add(3);
        assert_eq!(queue.remove(), 2);
        assert_eq!(queue.remove(), 3);
    }
}
