use crate::staque::core::{Items, Node, Staque};

/// A linked-list based last-in-first-out collection.
///
/// Elements are pushed and popped at the head of the chain, so both `add`
/// and `extract` are constant time.
///
/// # Example
/// ```
/// use stacalc::staque::{Stack, core::Staque};
///
/// let mut stack = Stack::new();
/// stack.add(1);
/// stack.add(2);
///
/// assert_eq!(stack.extract(), Some(2));
/// assert_eq!(stack.extract(), Some(1));
/// assert_eq!(stack.extract(), None);
/// ```
#[derive(Debug, Default)]
pub struct Stack<T> {
    first: Option<Box<Node<T>>>,
    size:  usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { first: None, size: 0 }
    }
}

impl<T> Staque<T> for Stack<T> {
    fn add(&mut self, value: T) {
        self.first = Some(Box::new(Node { value, next: self.first.take() }));
        self.size += 1;
    }

    fn extract(&mut self) -> Option<T> {
        self.first.take().map(|node| {
                             self.first = node.next;
                             self.size -= 1;
                             node.value
                         })
    }

    fn get(&self) -> Option<&T> {
        self.first.as_deref().map(|node| &node.value)
    }

    fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn items(&self) -> Items<'_, T> {
        Items::new(self.first.as_deref())
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.add(value);
        }
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type IntoIter = Items<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, value) in self.items().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

// Chain destruction must stay iterative, not recurse through the boxes.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        while let Some(node) = self.first.take() {
            self.first = node.next;
        }
    }
}
