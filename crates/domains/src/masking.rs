//! Soft-delete masking.
//!
//! Only the `is_delete` flag is persisted. The placeholder is computed on
//! every read and the stored content is never touched.

pub trait SoftDeletable {
    /// Text shown in place of deleted content.
    const PLACEHOLDER: &'static str;

    fn is_deleted(&self) -> bool;

    fn content(&self) -> &str;

    fn visible_content(&self) -> &str {
        if self.is_deleted() {
            Self::PLACEHOLDER
        } else {
            self.content()
        }
    }
}
