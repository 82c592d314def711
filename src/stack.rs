/// A last-in, first-out collection backed by a `Vec`.
///
/// Used as the work list of [`ConnectedRegionPainter::flood_fill`](crate::ConnectedRegionPainter::flood_fill),
/// but usable on its own for any element type, including move-only ones.
///
/// ```
/// use koans_rs::Stack;
///
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
/// assert_eq!(stack.pop(), Some("b"));
/// assert_eq!(stack.top(), Some(&"a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a value on top of the stack.
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Returns the top value without removing it.
    pub fn top(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.elements.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Debug;

    fn check_push_pop<T: Clone + PartialEq + Debug>(value: T) {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push(value.clone());
        assert!(!stack.is_empty());
        assert_eq!(stack.top(), Some(&value));

        assert_eq!(stack.pop(), Some(value));
        assert!(stack.is_empty());
    }

    fn check_ordering<T: Clone + PartialEq + Debug>(v1: T, v2: T) {
        // Asymmetric sequence
        let data = vec![
            v1.clone(),
            v2.clone(),
            v2.clone(),
            v1.clone(),
            v2.clone(),
            v2.clone(),
            v2.clone(),
            v1,
            v2.clone(),
            v2.clone(),
            v2.clone(),
            v2,
        ];

        let mut stack = Stack::new();
        for value in &data {
            stack.push(value.clone());
            assert_eq!(stack.top(), Some(value));
        }
        assert_eq!(stack.len(), data.len());

        for value in data.iter().rev() {
            assert!(!stack.is_empty());
            assert_eq!(stack.top(), Some(value));
            assert_eq!(stack.pop().as_ref(), Some(value));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let stack = Stack::<String>::default();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = Stack::<i32>::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top_mut(), None);
    }

    #[test]
    fn test_push_pop() {
        check_push_pop("aaa".to_string());
        check_push_pop(99);
        check_push_pop('A');
    }

    #[test]
    fn test_ordering() {
        check_ordering("aaa".to_string(), "bbb".to_string());
        check_ordering(99, 77);
        check_ordering('A', 'Z');
    }

    #[test]
    fn test_move_only_values() {
        let data = ["aaa", "bbb", "bbb", "aaa", "bbb", "aaa"];

        let mut stack: Stack<Box<String>> = Stack::new();
        for value in data {
            stack.push(Box::new(value.to_string()));
            assert_eq!(stack.top().map(|b| b.as_str()), Some(value));
        }

        for value in data.iter().rev() {
            let popped = stack.pop().expect("stack should not be empty");
            assert_eq!(*popped, *value);
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_top_mut() {
        let mut stack: Stack<i32> = [1, 2].into_iter().collect();
        if let Some(top) = stack.top_mut() {
            *top = 5;
        }
        assert_eq!(stack.pop(), Some(5));
        assert_eq!(stack.pop(), Some(1));
    }

    #[test]
    fn test_extend_and_clear() {
        let mut stack = Stack::with_capacity(4);
        stack.extend(vec!['a', 'b', 'c']);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Some(&'c'));

        stack.clear();
        assert!(stack.is_empty());
    }
}
