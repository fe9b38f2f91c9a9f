//! Attachment list state.

use outbox_core::AttachmentRef;

use crate::error::GuiError;

/// Ordered collection of picked attachments.
///
/// Order is insertion order; removal by index is the only mutation besides
/// append. No deduplication - picking the same file twice yields two
/// independently removable entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentList {
    items: Vec<AttachmentRef>,
}

impl AttachmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attachment reference.
    pub fn add(&mut self, attachment: AttachmentRef) {
        self.items.push(attachment);
    }

    /// Removes the attachment at `index`, preserving the relative order of
    /// the rest.
    ///
    /// An out-of-range index means the list and the UI have desynchronized;
    /// that is a defect, not a recoverable case, and the list is left
    /// unmodified.
    pub fn remove_at(&mut self, index: usize) -> Result<AttachmentRef, GuiError> {
        if index >= self.items.len() {
            return Err(GuiError::AttachmentOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttachmentRef> {
        self.items.iter()
    }

    /// Snapshot of the current entries, for building the outgoing message.
    pub fn to_vec(&self) -> Vec<AttachmentRef> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_remove_returns_to_empty() {
        let mut list = AttachmentList::new();
        list.add(AttachmentRef::new("/tmp/a.txt"));
        assert_eq!(list.len(), 1);
        let removed = list.remove_at(0).unwrap();
        assert_eq!(removed, AttachmentRef::new("/tmp/a.txt"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = AttachmentList::new();
        list.add(AttachmentRef::new("/tmp/a.txt"));
        list.add(AttachmentRef::new("/tmp/b.txt"));
        list.add(AttachmentRef::new("/tmp/c.txt"));
        list.remove_at(1).unwrap();
        let names: Vec<_> = list.iter().map(AttachmentRef::display_name).collect();
        assert_eq!(names, vec!["a.txt", "c.txt"]);
    }

    #[test]
    fn test_out_of_range_leaves_list_unmodified() {
        let mut list = AttachmentList::new();
        list.add(AttachmentRef::new("/tmp/a.txt"));
        let err = list.remove_at(1).unwrap_err();
        assert!(matches!(
            err,
            GuiError::AttachmentOutOfRange { index: 1, len: 1 }
        ));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicates_are_independent_entries() {
        let mut list = AttachmentList::new();
        let a = AttachmentRef::new("/tmp/a.txt");
        list.add(a.clone());
        list.add(a);
        assert_eq!(list.len(), 2);
        list.remove_at(0).unwrap();
        assert_eq!(list.len(), 1);
    }
}
