/// Owning link to the rest of the chain; `None` marks the end.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell of the chain.
pub(crate) struct Node<T> {
    /// The element stored in this node.
    pub(crate) element: T,
    /// The successor, owned exclusively by this node.
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn boxed(element: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { element, next })
    }
}
