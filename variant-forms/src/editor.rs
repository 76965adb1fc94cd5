//! Variant editor state machine
//!
//! Owns the draft tree behind the create and edit forms. Every mutation is
//! funneled through index-addressed operations here, so sibling order can
//! only change at the acted-upon position and out-of-range indexes surface
//! as structured errors instead of panics.

use std::str::FromStr;

use rust_decimal::Decimal;

use shared::models::{ImageSource, ValueContent, ValueDraft, VariantDraft, VariantKind};

use crate::error::{FormError, FormResult};

/// In-memory variant tree
#[derive(Debug, Clone, Default)]
pub struct VariantEditor {
    variants: Vec<VariantDraft>,
}

impl VariantEditor {
    /// Empty editor (the edit flow loads into it)
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor pre-seeded with one blank card (the creation flow starts so)
    pub fn with_blank_variant() -> Self {
        Self {
            variants: vec![VariantDraft::empty()],
        }
    }

    /// Editor over an existing draft tree (edit flow load)
    pub fn from_drafts(variants: Vec<VariantDraft>) -> Self {
        Self { variants }
    }

    pub fn variants(&self) -> &[VariantDraft] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    // ========== Variant operations ==========

    /// Append a new card with no kind and one empty value
    pub fn add_variant(&mut self) {
        self.variants.push(VariantDraft::empty());
    }

    /// Remove the card at `index` from local state
    pub fn remove_variant(&mut self, index: usize) -> FormResult<VariantDraft> {
        if index >= self.variants.len() {
            return Err(FormError::out_of_range(index, None));
        }
        Ok(self.variants.remove(index))
    }

    /// Set the card's kind.
    ///
    /// Destructive: any values entered under the previous kind are discarded
    /// and replaced with a single empty row.
    pub fn set_variant_kind(&mut self, index: usize, kind: VariantKind) -> FormResult<()> {
        let variant = self.variant_mut(index)?;
        variant.kind = Some(kind);
        variant.values = vec![ValueDraft::empty()];
        Ok(())
    }

    // ========== Value operations ==========

    /// Append an empty value row to a card
    pub fn add_value(&mut self, variant: usize) -> FormResult<()> {
        self.variant_mut(variant)?.values.push(ValueDraft::empty());
        Ok(())
    }

    /// Remove a value row from local state
    pub fn remove_value(&mut self, variant: usize, value: usize) -> FormResult<ValueDraft> {
        let values = &mut self.variant_mut(variant)?.values;
        if value >= values.len() {
            return Err(FormError::out_of_range(variant, Some(value)));
        }
        Ok(values.remove(value))
    }

    /// Set the display text of a non-color value
    pub fn set_value(
        &mut self,
        variant: usize,
        value: usize,
        text: impl Into<String>,
    ) -> FormResult<()> {
        self.value_mut(variant, value)?.content = ValueContent::Plain(text.into());
        Ok(())
    }

    /// Parse and set the price; unparsable input coerces to zero
    pub fn set_price(&mut self, variant: usize, value: usize, raw: &str) -> FormResult<()> {
        self.value_mut(variant, value)?.price = Decimal::from_str(raw.trim()).unwrap_or_default();
        Ok(())
    }

    /// Parse and set the stock count; unparsable input coerces to zero
    pub fn set_stock(&mut self, variant: usize, value: usize, raw: &str) -> FormResult<()> {
        self.value_mut(variant, value)?.stock = raw.trim().parse().unwrap_or_default();
        Ok(())
    }

    /// Select a color; the value's display string becomes `"Color: <hex>"`.
    ///
    /// Hex codes containing `": "` would break the label round trip and are
    /// rejected. Marks the value as modified, like the picker does.
    pub fn set_color(
        &mut self,
        variant: usize,
        value: usize,
        hex: impl Into<String>,
    ) -> FormResult<()> {
        let hex = hex.into();
        if hex.contains(": ") {
            return Err(FormError::InvalidColor(hex));
        }
        let draft = self.value_mut(variant, value)?;
        draft.content = ValueContent::Color(hex);
        draft.is_new = true;
        Ok(())
    }

    /// Attach an encoded (or stored) image to a value
    pub fn set_image(&mut self, variant: usize, value: usize, image: ImageSource) -> FormResult<()> {
        self.value_mut(variant, value)?.image = image;
        Ok(())
    }

    // ========== Access helpers ==========

    pub fn variant(&self, index: usize) -> FormResult<&VariantDraft> {
        self.variants
            .get(index)
            .ok_or(FormError::out_of_range(index, None))
    }

    pub fn value(&self, variant: usize, value: usize) -> FormResult<&ValueDraft> {
        self.variant(variant)?
            .values
            .get(value)
            .ok_or(FormError::out_of_range(variant, Some(value)))
    }

    fn variant_mut(&mut self, index: usize) -> FormResult<&mut VariantDraft> {
        self.variants
            .get_mut(index)
            .ok_or(FormError::out_of_range(index, None))
    }

    fn value_mut(&mut self, variant: usize, value: usize) -> FormResult<&mut ValueDraft> {
        self.variant_mut(variant)?
            .values
            .get_mut(value)
            .ok_or(FormError::out_of_range(variant, Some(value)))
    }
}
