/// A single link in the chain underlying `Stack` and `Queue`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next:  Option<Box<Node<T>>>,
}

/// The shared contract for the ordered linked-list containers.
///
/// A staque is an ordered collection with `add`, `get` and `extract`
/// semantics; whether it behaves as a stack or as a queue is decided by where
/// the implementation inserts new elements. Emptiness is expressed through
/// `Option` rather than panicking: `get` and `extract` return `None` when
/// the container holds no elements.
pub trait Staque<T> {
    /// Adds an element to the collection.
    ///
    /// # Parameters
    /// - `value`: The element to add.
    fn add(&mut self, value: T);

    /// Retrieves the next element and removes it from the collection.
    ///
    /// # Returns
    /// - `Some(T)`: The removed element.
    /// - `None`: If the collection is empty.
    fn extract(&mut self) -> Option<T>;

    /// Retrieves the next element without removing it.
    ///
    /// # Returns
    /// - `Some(&T)`: A reference to the element `extract` would remove.
    /// - `None`: If the collection is empty.
    fn get(&self) -> Option<&T>;

    /// Checks whether the collection has elements.
    ///
    /// # Returns
    /// `true` if the collection is empty, `false` otherwise.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns an iterator traversing the chain from the front.
    ///
    /// The front is the element `extract` would remove next, so iteration
    /// order matches extraction order.
    fn items(&self) -> Items<'_, T>;
}

/// An iterator over the elements of a linked chain, front to back.
pub struct Items<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Items<'a, T> {
    pub(crate) const fn new(first: Option<&'a Node<T>>) -> Self {
        Self { next: first }
    }
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
                     self.next = node.next.as_deref();
                     &node.value
                 })
    }
}
