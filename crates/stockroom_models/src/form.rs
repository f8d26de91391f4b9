//! Editing contract for product forms.
//!
//! Every product kind is edited through the same shape: the current field
//! values, a change handler, and [`FormProps`] (`read_only`, `required`). The
//! concrete field set is selected by the [`ProductKind`] discriminator via
//! [`ProductKind::form_fields`].

use crate::product::{Product, ProductKind};
use std::borrow::Cow;
use std::collections::BTreeMap;
use stockroom_query::Searchable;

/// Errors raised by [`ProductForm`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The form was opened read-only.
    #[error("form is read-only")]
    ReadOnly,

    /// The key is not part of this product kind's field set.
    #[error("unknown field '{field}' for {kind} products")]
    UnknownField {
        /// The rejected key.
        field: String,
        /// The form's product kind.
        kind: ProductKind,
    },

    /// A field marked as required has no value.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Display and validation flags shared by every form variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormProps {
    /// Reject every edit.
    pub read_only: bool,
    /// Enforce required fields on [`ProductForm::validate`].
    pub required: bool,
}

/// One editable field of a product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field key, matching [`Searchable::field`] on [`Product`].
    pub key: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    /// Must be non-empty when the form is required.
    pub required_for_submit: bool,
}

const fn field(key: &'static str, label: &'static str, required_for_submit: bool) -> FieldDescriptor {
    FieldDescriptor {
        key,
        label,
        required_for_submit,
    }
}

const SUPPLY_FIELDS: &[FieldDescriptor] = &[
    field("name", "Name", true),
    field("category", "Category", true),
    field("unit", "Unit", true),
    field("supplier", "Supplier", false),
];

const DRUG_FIELDS: &[FieldDescriptor] = &[
    field("name", "Name", true),
    field("category", "Category", true),
    field("activeIngredient", "Active ingredient", true),
    field("concentration", "Concentration", true),
    field("presentation", "Presentation", true),
    field("requiresPrescription", "Requires prescription", false),
];

impl ProductKind {
    /// The fields a form for this kind shows, in display order.
    #[must_use]
    pub fn form_fields(self) -> &'static [FieldDescriptor] {
        match self {
            ProductKind::Supply => SUPPLY_FIELDS,
            ProductKind::Drug => DRUG_FIELDS,
        }
    }
}

/// A product form for one kind.
///
/// Holds the field values as strings, forwarding every accepted edit to the
/// change handler.
pub struct ProductForm<F> {
    kind: ProductKind,
    data: BTreeMap<&'static str, String>,
    props: FormProps,
    on_change: F,
}

impl<F> ProductForm<F>
where
    F: FnMut(&str, &str),
{
    /// Opens an empty form for `kind`.
    pub fn new(kind: ProductKind, props: FormProps, on_change: F) -> Self {
        let data = kind
            .form_fields()
            .iter()
            .map(|f| (f.key, String::new()))
            .collect();
        Self {
            kind,
            data,
            props,
            on_change,
        }
    }

    /// Opens a form pre-filled from `product`.
    pub fn for_product(product: &Product, props: FormProps, on_change: F) -> Self {
        let kind = product.kind();
        let data = kind
            .form_fields()
            .iter()
            .map(|f| {
                let value = product.field(f.key).map(Cow::into_owned).unwrap_or_default();
                (f.key, value)
            })
            .collect();
        Self {
            kind,
            data,
            props,
            on_change,
        }
    }

    /// Sets a field value and notifies the change handler.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ReadOnly`] for read-only forms and
    /// [`FormError::UnknownField`] when `key` is not part of this kind.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        if self.props.read_only {
            return Err(FormError::ReadOnly);
        }
        let Some(slot) = self.data.get_mut(key) else {
            return Err(FormError::UnknownField {
                field: key.to_string(),
                kind: self.kind,
            });
        };
        *slot = value.into();
        (self.on_change)(key, slot.as_str());
        Ok(())
    }

    /// Checks required fields when the form is required.
    ///
    /// # Errors
    ///
    /// Returns the first required field, in display order, that is empty.
    pub fn validate(&self) -> Result<(), FormError> {
        if !self.props.required {
            return Ok(());
        }
        match self
            .fields()
            .iter()
            .find(|f| f.required_for_submit && self.value(f.key).is_none_or(str::is_empty))
        {
            Some(missing) => Err(FormError::MissingField(missing.label)),
            None => Ok(()),
        }
    }
}

impl<F> ProductForm<F> {
    /// The product kind this form edits.
    #[must_use]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// The form's flags.
    #[must_use]
    pub fn props(&self) -> FormProps {
        self.props
    }

    /// Field descriptors in display order.
    #[must_use]
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.kind.form_fields()
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

impl<F> core::fmt::Debug for ProductForm<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductForm")
            .field("kind", &self.kind)
            .field("data", &self.data)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}
