use crate::record::{FieldSpec, Semantic, Slot};

/// Total getter for one field of record type `R`.
///
/// Every catalog field gets one of these as an associated constant on its
/// record type. [`Accessor::get`] never fails: missing data is normalized
/// into a typed default according to the field's type and slot.
pub struct Accessor<R, T> {
	name: &'static str,
	slot: Slot,
	read: fn(&R) -> Option<&T>,
}

impl<R, T: Semantic> Accessor<R, T> {
	/// Declare an accessor over a field slot of `R`.
	pub const fn new(name: &'static str, slot: Slot, read: fn(&R) -> Option<&T>) -> Self {
		Self { name, slot, read }
	}

	/// Field name.
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Catalog entry for this field.
	pub const fn spec(&self) -> FieldSpec {
		FieldSpec {
			name: self.name,
			ty: T::FIELD_TYPE,
			slot: self.slot,
		}
	}

	/// Read the field, applying the default policy when the record is
	/// absent or the field is unset.
	pub fn get(&self, record: Option<&R>) -> T {
		let Some(record) = record else {
			return T::fallback(T::FIELD_TYPE.absent_fallback());
		};

		match (self.read)(record) {
			Some(value) => value.clone(),
			None => T::fallback(T::FIELD_TYPE.unset_fallback(self.slot)),
		}
	}

	/// Whether the record is present and the field holds a value.
	pub fn is_set(&self, record: Option<&R>) -> bool {
		record.and_then(self.read).is_some()
	}
}
