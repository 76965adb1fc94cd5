// variant-forms/tests/flows.rs
// Flow tests against a recording mock service

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use shared::models::{
    ProductSummary, ProductVariants, ValueContent, Variant, VariantKind, VariantValue,
};
use shared::response::SubmitOutcome;
use variant_client::{ClientError, ClientResult, VariantService};
use variant_forms::{CatalogView, CreateForm, EditForm, FormError};

/// Test double that records every remote call and can be told to fail
/// specific operations.
struct MockService {
    calls: Mutex<Vec<String>>,
    fail: HashSet<&'static str>,
    catalog: Vec<ProductVariants>,
}

impl MockService {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: HashSet::new(),
            catalog: vec![shirt_catalog()],
        }
    }

    fn failing(ops: &[&'static str]) -> Self {
        let mut mock = Self::new();
        mock.fail = ops.iter().copied().collect();
        mock
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, detail: String) -> ClientResult<()> {
        self.calls.lock().unwrap().push(detail);
        if self.fail.contains(op) {
            return Err(ClientError::Internal("mock failure".to_string()));
        }
        Ok(())
    }
}

fn value(id: Option<&str>, label: &str) -> VariantValue {
    VariantValue {
        id: id.map(str::to_string),
        value: label.to_string(),
        price: rust_decimal::Decimal::new(1999, 2),
        stock: 5,
        color: String::new(),
        image: String::new(),
        created_at: None,
        updated_at: None,
    }
}

fn shirt_catalog() -> ProductVariants {
    ProductVariants {
        id: "42".to_string(),
        name: "Shirt".to_string(),
        variants: vec![
            Variant {
                id: Some("v-1".to_string()),
                kind: VariantKind::Size,
                variant_values: vec![value(Some("10"), "M"), value(Some("11"), "L")],
            },
            Variant {
                id: Some("v-2".to_string()),
                kind: VariantKind::Color,
                variant_values: vec![VariantValue {
                    color: "#336699".to_string(),
                    ..value(Some("12"), "Color: #336699")
                }],
            },
        ],
    }
}

#[async_trait]
impl VariantService for MockService {
    async fn products(&self) -> ClientResult<Vec<ProductSummary>> {
        self.record("products", "products".to_string())?;
        Ok(vec![ProductSummary {
            id: "42".to_string(),
            name: "Shirt".to_string(),
        }])
    }

    async fn catalog(&self) -> ClientResult<Vec<ProductVariants>> {
        self.record("catalog", "catalog".to_string())?;
        Ok(self.catalog.clone())
    }

    async fn product_variants(&self, product_id: &str) -> ClientResult<ProductVariants> {
        self.record("product_variants", format!("product_variants {product_id}"))?;
        Ok(self.catalog[0].clone())
    }

    async fn create_variants(
        &self,
        product_id: &str,
        variants: &[shared::models::VariantDraft],
    ) -> ClientResult<SubmitOutcome> {
        self.record(
            "create_variants",
            format!("create_variants {product_id} x{}", variants.len()),
        )?;
        Ok(SubmitOutcome {
            success: Some("Variants saved successfully".to_string()),
        })
    }

    async fn update_variants(
        &self,
        product_id: &str,
        variants: &[shared::models::VariantDraft],
    ) -> ClientResult<SubmitOutcome> {
        self.record(
            "update_variants",
            format!("update_variants {product_id} x{}", variants.len()),
        )?;
        Ok(SubmitOutcome { success: None })
    }

    async fn delete_value(&self, variant_id: &str, value_id: &str) -> ClientResult<()> {
        self.record("delete_value", format!("delete_value {variant_id}/{value_id}"))
    }

    async fn delete_variant(&self, product_id: &str, variant_id: &str) -> ClientResult<()> {
        self.record(
            "delete_variant",
            format!("delete_variant {product_id}/{variant_id}"),
        )
    }

    async fn delete_product_variants(&self, product_id: &str) -> ClientResult<()> {
        self.record(
            "delete_product_variants",
            format!("delete_product_variants {product_id}"),
        )
    }

    fn image_url(&self, path: &str) -> String {
        format!("http://mock/storage/{path}")
    }
}

// ========== Creation flow ==========

#[tokio::test]
async fn test_create_validation_blocks_without_network_calls() {
    let mut form = CreateForm::new(MockService::new());
    form.select_product("42");

    // One missing kind; the blank value also carries an empty label and a
    // zero price, and gets a negative stock on top
    form.editor.set_stock(0, 0, "-1").unwrap();

    let err = form.submit().await.unwrap_err();
    let problems = err.problems().expect("validation error").to_vec();
    assert_eq!(problems.len(), 4);
    assert!(form.service().calls().is_empty());
}

#[tokio::test]
async fn test_create_three_distinct_rule_violations() {
    let mut form = CreateForm::new(MockService::new());
    form.select_product("42");

    // Variant 1: kind missing but value fields fine
    form.editor.set_value(0, 0, "M").unwrap();
    form.editor.set_price(0, 0, "10").unwrap();
    // Variant 2: price zero
    form.editor.add_variant();
    form.editor.set_variant_kind(1, VariantKind::Size).unwrap();
    form.editor.set_value(1, 0, "L").unwrap();
    // Variant 3: stock negative
    form.editor.add_variant();
    form.editor
        .set_variant_kind(2, VariantKind::Material)
        .unwrap();
    form.editor.set_value(2, 0, "Linen").unwrap();
    form.editor.set_price(2, 0, "3.50").unwrap();
    form.editor.set_stock(2, 0, "-1").unwrap();

    let err = form.submit().await.unwrap_err();
    assert_eq!(err.problems().expect("validation error").len(), 3);
    assert!(form.service().calls().is_empty());
}

#[tokio::test]
async fn test_create_requires_product_selection() {
    let mut form = CreateForm::new(MockService::new());
    form.editor.set_variant_kind(0, VariantKind::Size).unwrap();
    form.editor.set_value(0, 0, "M").unwrap();
    form.editor.set_price(0, 0, "19.99").unwrap();

    assert!(matches!(
        form.submit().await,
        Err(FormError::NoProductSelected)
    ));
    assert!(form.service().calls().is_empty());
}

#[tokio::test]
async fn test_create_submit_posts_once_and_returns_message() {
    let mut form = CreateForm::new(MockService::new());
    form.load_products().await.unwrap();
    form.select_product(form.products()[0].id.clone());

    form.editor.set_variant_kind(0, VariantKind::Size).unwrap();
    form.editor.set_value(0, 0, "M").unwrap();
    form.editor.set_price(0, 0, "19.99").unwrap();
    form.editor.set_stock(0, 0, "5").unwrap();

    let message = form.submit().await.unwrap();
    assert_eq!(message, "Variants saved successfully");
    assert_eq!(
        form.service().calls(),
        vec!["products".to_string(), "create_variants 42 x1".to_string()]
    );
}

// ========== Edit flow ==========

async fn loaded_edit_form(mock: MockService) -> EditForm<MockService> {
    let mut form = EditForm::new(mock, "42");
    form.load().await.unwrap();
    form
}

#[tokio::test]
async fn test_edit_load_builds_drafts() {
    let form = loaded_edit_form(MockService::new()).await;
    assert_eq!(form.product_name(), Some("Shirt"));
    assert_eq!(form.editor.len(), 2);

    let size = form.editor.variant(0).unwrap();
    assert_eq!(size.kind, Some(VariantKind::Size));
    assert!(!size.values[0].is_new);

    // Color rows come back in tagged form
    let color = form.editor.variant(1).unwrap();
    assert_eq!(
        color.values[0].content,
        ValueContent::Color("#336699".to_string())
    );
}

#[tokio::test]
async fn test_remove_unsaved_value_is_local_only() {
    let mut form = loaded_edit_form(MockService::new()).await;
    form.editor.add_value(0).unwrap();
    let calls_before = form.service().calls().len();

    form.remove_value(0, 2).await.unwrap();

    assert_eq!(form.service().calls().len(), calls_before);
    assert_eq!(form.editor.variant(0).unwrap().values.len(), 2);
}

#[tokio::test]
async fn test_remove_persisted_value_deletes_remotely_first() {
    let mut form = loaded_edit_form(MockService::new()).await;

    form.remove_value(0, 0).await.unwrap();

    let calls = form.service().calls();
    assert_eq!(calls.last().unwrap(), "delete_value v-1/10");
    let values = &form.editor.variant(0).unwrap().values;
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].display_value(), "L");
}

#[tokio::test]
async fn test_failed_value_delete_leaves_state_unchanged() {
    let mut form = loaded_edit_form(MockService::failing(&["delete_value"])).await;

    assert!(form.remove_value(0, 0).await.is_err());

    assert_eq!(form.editor.variant(0).unwrap().values.len(), 2);
}

#[tokio::test]
async fn test_failed_variant_delete_leaves_list_unchanged() {
    let mut form = loaded_edit_form(MockService::failing(&["delete_variant"])).await;

    let err = form.remove_variant(0).await.unwrap_err();
    assert!(matches!(err, FormError::Client(_)));

    // Exactly one delete was attempted, nothing was removed locally
    let deletes = form
        .service()
        .calls()
        .iter()
        .filter(|c| c.starts_with("delete_variant"))
        .count();
    assert_eq!(deletes, 1);
    assert_eq!(form.editor.len(), 2);
}

#[tokio::test]
async fn test_variant_delete_success_removes_locally() {
    let mut form = loaded_edit_form(MockService::new()).await;

    form.remove_variant(0).await.unwrap();

    assert_eq!(form.editor.len(), 1);
    assert_eq!(
        form.editor.variant(0).unwrap().kind,
        Some(VariantKind::Color)
    );
}

#[tokio::test]
async fn test_edit_submit_requires_variants_but_not_field_validity() {
    let mut form = EditForm::new(MockService::new(), "42");
    assert!(matches!(form.submit().await, Err(FormError::EmptyEditor)));
    assert!(form.service().calls().is_empty());

    // Invalid fields still submit; the edit flow does not validate
    let mut form = loaded_edit_form(MockService::new()).await;
    form.editor.set_price(0, 0, "0").unwrap();
    let message = form.submit().await.unwrap();
    assert_eq!(message, "Variants updated successfully!");
    assert_eq!(
        form.service().calls().last().unwrap(),
        "update_variants 42 x2"
    );
}

// ========== List view ==========

#[tokio::test]
async fn test_catalog_delete_drops_product_on_success() {
    let mut view = CatalogView::new(MockService::new());
    view.load().await.unwrap();
    assert_eq!(view.products().len(), 1);

    view.delete_product_variants("42").await.unwrap();
    assert!(view.is_empty());
}

#[tokio::test]
async fn test_catalog_delete_failure_keeps_products() {
    let mut view = CatalogView::new(MockService::failing(&["delete_product_variants"]));
    view.load().await.unwrap();

    assert!(view.delete_product_variants("42").await.is_err());
    assert_eq!(view.products().len(), 1);
}

#[tokio::test]
async fn test_catalog_swatch_and_image_helpers() {
    let mut view = CatalogView::new(MockService::new());
    view.load().await.unwrap();

    let color_value = &view.products()[0].variants[1].variant_values[0];
    assert_eq!(color_value.swatch_hex(), Some("#336699"));
    assert_eq!(
        view.image_url("variants/17.jpg"),
        "http://mock/storage/variants/17.jpg"
    );
}
