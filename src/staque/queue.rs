use crate::staque::core::{Items, Node, Staque};

/// A linked-list based first-in-first-out collection.
///
/// Elements are appended at the tail of the chain and extracted at the head,
/// so extraction order matches insertion order. Appending walks the chain to
/// its end.
///
/// # Example
/// ```
/// use stacalc::staque::{Queue, core::Staque};
///
/// let mut queue = Queue::new();
/// queue.add(1);
/// queue.add(2);
///
/// assert_eq!(queue.extract(), Some(1));
/// assert_eq!(queue.extract(), Some(2));
/// assert_eq!(queue.extract(), None);
/// ```
#[derive(Debug, Default)]
pub struct Queue<T> {
    first: Option<Box<Node<T>>>,
    size:  usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { first: None, size: 0 }
    }
}

impl<T> Staque<T> for Queue<T> {
    fn add(&mut self, value: T) {
        let mut cursor = &mut self.first;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
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

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for value in iter {
            queue.add(value);
        }
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type IntoIter = Items<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Queue<T> {
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
impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while let Some(node) = self.first.take() {
            self.first = node.next;
        }
    }
}
