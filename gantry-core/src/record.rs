use crate::{Result, Value};
use std::sync::Arc;

/// Descriptor of one record field as the binder sees it.
pub struct FieldDef<R> {
    /// Column name the field binds to.
    pub name: &'static str,
    /// Writes a coerced value into the field, `None` when the field is
    /// excluded from binding.
    pub set: Option<fn(&mut R, Value) -> Result<()>>,
}

impl<R> FieldDef<R> {
    pub fn is_settable(&self) -> bool {
        self.set.is_some()
    }
}

/// A struct whose instances can be populated from result rows.
///
/// Implemented through `#[derive(Record)]`, which emits a static descriptor
/// table mapping column names to field setters. Field names bind to the
/// column of the same name with any leading underscore stripped, the
/// `#[record(name = "...")]` attribute overrides the column and
/// `#[record(skip)]` excludes the field from binding.
pub trait Record: Default + 'static {
    /// Field descriptors in declaration order.
    fn fields() -> &'static [FieldDef<Self>];
    /// Descriptor of the field binding the given column name.
    fn field(column: &str) -> Option<&'static FieldDef<Self>> {
        Self::fields().iter().find(|field| field.name == column)
    }
}

/// Ownership wrapper applied to every record appended to a collection.
pub trait RecordElement<R: Record> {
    fn wrap(record: R) -> Self;
}

impl<R: Record> RecordElement<R> for R {
    fn wrap(record: R) -> Self {
        record
    }
}
impl<R: Record> RecordElement<R> for Box<R> {
    fn wrap(record: R) -> Self {
        Box::new(record)
    }
}
impl<R: Record> RecordElement<R> for Arc<R> {
    fn wrap(record: R) -> Self {
        Arc::new(record)
    }
}

/// Growable destination the collection binder appends bound records to.
///
/// Records appended before a failure stay in the destination.
pub trait Records<R: Record> {
    fn append(&mut self, record: R);
}

impl<R: Record, E: RecordElement<R>> Records<R> for Vec<E> {
    fn append(&mut self, record: R) {
        self.push(E::wrap(record));
    }
}
