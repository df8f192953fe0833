/// A document whose state can be captured and restored by a `History`.
///
/// The state is split into two parts: an ordered sequence of items and a
/// single sort condition. Implementors expose two distinct equality notions
/// on items. Uniqueness (which items count as "the same" entity) is enforced
/// by `replace_items`; `items_have_same_state` is the full-value comparison
/// the engine uses to decide whether a snapshot differs from the live state.
pub trait HistoryDocument {
    /// An entity stored in the document.
    type Item: Clone;
    /// The ordering selector applied to the document.
    type Sort: Clone + PartialEq;
    /// Error raised when a replacement item set is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Borrows the current items, in stored order.
    fn items(&self) -> &[Self::Item];

    /// Replaces all items at once.
    ///
    /// # Errors
    ///
    /// Returns an error if `items` violates the document's uniqueness
    /// invariant. The document must be left unchanged in that case.
    fn replace_items(&mut self, items: Vec<Self::Item>) -> Result<(), Self::Error>;

    /// Returns the current sort condition.
    fn sort_condition(&self) -> Self::Sort;

    /// Sets the sort condition.
    fn set_sort_condition(&mut self, sort: Self::Sort);

    /// Full-value equality between two items.
    fn items_have_same_state(a: &Self::Item, b: &Self::Item) -> bool;

    /// Returns a copy of the current items.
    fn snapshot_items(&self) -> Vec<Self::Item> {
        self.items().to_vec()
    }
}
