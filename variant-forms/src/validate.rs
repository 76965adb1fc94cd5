//! Creation-flow validation
//!
//! Collects every problem across the draft tree into one human-readable
//! list. Nothing short-circuits, and any problem aborts submission before a
//! network call is made. The edit flow deliberately skips these checks.

use rust_decimal::Decimal;

use shared::models::VariantDraft;

use crate::error::{FormError, FormResult};

/// Collect all pre-submission problems, in tree order.
///
/// Positions are 1-indexed to match what the admin sees on screen.
pub fn collect_problems(variants: &[VariantDraft]) -> Vec<String> {
    let mut problems = Vec::new();

    for (variant_idx, variant) in variants.iter().enumerate() {
        let position = variant_idx + 1;
        let kind = variant.kind_str();
        if variant.kind.is_none() {
            problems.push(format!("Variant Type for Variant {position}"));
        }
        for (value_idx, value) in variant.values.iter().enumerate() {
            let value_position = value_idx + 1;
            if value.content.is_empty() {
                problems.push(format!(
                    "Value for {kind} Variant {position}, Value {value_position}"
                ));
            }
            if value.price <= Decimal::ZERO {
                problems.push(format!(
                    "Price for {kind} Variant {position}, Value {value_position} must be a positive number."
                ));
            }
            if value.stock < 0 {
                problems.push(format!(
                    "Stock for {kind} Variant {position}, Value {value_position} cannot be negative."
                ));
            }
        }
    }

    problems
}

/// Validation gate used by the creation flow
pub fn ensure_valid(variants: &[VariantDraft]) -> FormResult<()> {
    let problems = collect_problems(variants);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(FormError::Validation(problems))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ValueContent, ValueDraft, VariantKind};

    fn valid_value(label: &str) -> ValueDraft {
        ValueDraft {
            content: ValueContent::Plain(label.to_string()),
            price: Decimal::ONE,
            stock: 0,
            ..ValueDraft::empty()
        }
    }

    #[test]
    fn test_valid_tree_has_no_problems() {
        let variants = vec![VariantDraft {
            id: None,
            kind: Some(VariantKind::Size),
            values: vec![valid_value("M"), valid_value("L")],
        }];
        assert!(collect_problems(&variants).is_empty());
        assert!(ensure_valid(&variants).is_ok());
    }

    #[test]
    fn test_each_rule_produces_one_problem() {
        // One missing kind, one zero price, one negative stock
        let missing_kind = VariantDraft {
            id: None,
            kind: None,
            values: vec![valid_value("M")],
        };
        let zero_price = VariantDraft {
            id: None,
            kind: Some(VariantKind::Size),
            values: vec![ValueDraft {
                price: Decimal::ZERO,
                ..valid_value("L")
            }],
        };
        let negative_stock = VariantDraft {
            id: None,
            kind: Some(VariantKind::Material),
            values: vec![ValueDraft {
                stock: -1,
                ..valid_value("Linen")
            }],
        };

        let problems = collect_problems(&[missing_kind, zero_price, negative_stock]);
        assert_eq!(problems.len(), 3);
        assert_eq!(problems[0], "Variant Type for Variant 1");
        assert!(problems[1].starts_with("Price for size Variant 2, Value 1"));
        assert!(problems[2].starts_with("Stock for material Variant 3, Value 1"));
    }

    #[test]
    fn test_empty_value_and_bad_price_both_reported() {
        // Violations aggregate per value instead of short-circuiting
        let variant = VariantDraft {
            id: None,
            kind: Some(VariantKind::Custom),
            values: vec![ValueDraft::empty()],
        };
        let problems = collect_problems(&[variant]);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].starts_with("Value for custom Variant 1"));
        assert!(problems[1].starts_with("Price for custom Variant 1"));
    }
}
