//! Product catalog store.

use std::collections::BTreeSet;

use crate::{
    api::CatalogApi,
    products::{CatalogError, Product},
    status::Status,
};

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// State container for the fetched catalog, the current selection and the
/// read-side filter state.
#[derive(Debug)]
pub struct ProductStore<A> {
    api: A,
    products: Vec<Product>,
    selected_product: Option<Product>,
    status: Status,
    search_query: String,
    selected_category: String,
}

impl<A> ProductStore<A> {
    /// Create an empty store backed by the given catalog client.
    pub fn new(api: A) -> Self {
        Self {
            api,
            products: Vec::new(),
            selected_product: None,
            status: Status::default(),
            search_query: String::new(),
            selected_category: ALL_CATEGORIES.to_owned(),
        }
    }

    /// The currently fetched product list, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The currently selected product, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    /// Lifecycle of the most recent catalog operation.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The current search text.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The current category filter, [`ALL_CATEGORIES`] by default.
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Update the search text. Pure filter state, the catalog is untouched.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Update the category filter. Pure filter state, the catalog is
    /// untouched.
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Detach the current selection, e.g. on leaving a detail view.
    pub fn clear_selected_product(&mut self) {
        self.selected_product = None;
    }

    /// Reset a recorded failure after the UI has surfaced it.
    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }

    /// Select a product by id from the already-fetched list.
    ///
    /// No network call is made: an id absent from the current list fails
    /// with [`CatalogError::NotFound`] and leaves the selection unchanged,
    /// so callers must populate the catalog before deep-linking into it.
    pub fn select_product(&mut self, id: u64) -> Result<(), CatalogError> {
        match self.products.iter().find(|product| product.id == id) {
            Some(product) => {
                self.selected_product = Some(product.clone());
                self.status = Status::Succeeded;
                Ok(())
            }
            None => {
                let error = CatalogError::NotFound;
                self.status = Status::Failed(error.to_string());
                Err(error)
            }
        }
    }

    /// Products matching the current search text and category filter.
    ///
    /// A product matches when its title or category contains the search
    /// text case-insensitively, and the selected category is the
    /// [`ALL_CATEGORIES`] sentinel or equals the product's category exactly.
    pub fn filtered_products(&self) -> Vec<&Product> {
        let query = self.search_query.to_lowercase();

        self.products
            .iter()
            .filter(|product| {
                let matches_query = product.title.to_lowercase().contains(&query)
                    || product.category.to_lowercase().contains(&query);

                let matches_category = self.selected_category == ALL_CATEGORIES
                    || product.category == self.selected_category;

                matches_query && matches_category
            })
            .collect()
    }

    /// Distinct categories present in the fetched catalog, sorted, always
    /// prefixed with the [`ALL_CATEGORIES`] sentinel.
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .products
            .iter()
            .map(|product| product.category.as_str())
            .collect();

        std::iter::once(ALL_CATEGORIES)
            .chain(distinct)
            .map(ToOwned::to_owned)
            .collect()
    }
}

impl<A: CatalogApi> ProductStore<A> {
    /// Fetch the catalog, replacing the product list wholesale on success.
    ///
    /// Overlapping calls are neither deduplicated nor cancelled; the last
    /// response to resolve wins. On failure the previous product list is
    /// preserved and the error message recorded.
    pub async fn fetch_products(&mut self) -> Result<(), CatalogError> {
        self.status = Status::Pending;

        match self.api.fetch_products().await {
            Ok(products) => {
                self.products = products;
                self.status = Status::Succeeded;
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(%message, "catalog fetch failed");
                self.status = Status::Failed(message.clone());
                Err(CatalogError::Fetch(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::api::{ApiError, MockCatalogApi};

    use super::*;

    fn product(id: u64, title: &str, category: &str, price: Decimal) -> Product {
        Product {
            id,
            title: title.to_owned(),
            description: String::new(),
            price,
            discount_percentage: Decimal::ZERO,
            rating: 4.5,
            stock: 10,
            brand: String::new(),
            category: category.to_owned(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "iPhone 15", "Electronics", Decimal::from(999)),
            product(2, "Running Shoe", "Footwear", Decimal::from(150)),
            product(3, "Desk Lamp", "Home", Decimal::from(35)),
        ]
    }

    fn store_with_catalog() -> ProductStore<MockCatalogApi> {
        let mut api = MockCatalogApi::new();
        api.expect_fetch_products().return_once(|| Ok(catalog()));

        ProductStore::new(api)
    }

    #[tokio::test]
    async fn fetch_replaces_list_and_settles() -> TestResult {
        let mut store = store_with_catalog();

        store.fetch_products().await?;

        assert_eq!(store.products().len(), 3);
        assert_eq!(store.status(), &Status::Succeeded);

        Ok(())
    }

    #[tokio::test]
    async fn failed_fetch_preserves_previous_list() -> TestResult {
        let mut api = MockCatalogApi::new();
        api.expect_fetch_products()
            .once()
            .return_once(|| Ok(catalog()));
        api.expect_fetch_products()
            .once()
            .return_once(|| Err(ApiError::Api("Failed to fetch products".to_owned())));

        let mut store = ProductStore::new(api);
        store.fetch_products().await?;

        let result = store.fetch_products().await;

        assert!(
            matches!(result, Err(CatalogError::Fetch(_))),
            "expected Fetch error, got {result:?}"
        );
        assert_eq!(store.products().len(), 3, "previous list must be kept");
        assert_eq!(store.status().error(), Some("Failed to fetch products"));

        Ok(())
    }

    #[tokio::test]
    async fn later_fetch_response_wins() -> TestResult {
        let mut api = MockCatalogApi::new();
        api.expect_fetch_products()
            .once()
            .return_once(|| Ok(catalog()));
        api.expect_fetch_products()
            .once()
            .return_once(|| Ok(vec![product(9, "Kettle", "Home", Decimal::from(25))]));

        let mut store = ProductStore::new(api);
        store.fetch_products().await?;
        store.fetch_products().await?;

        assert_eq!(store.products().len(), 1, "list is replaced wholesale");

        Ok(())
    }

    #[tokio::test]
    async fn select_product_requires_fetched_id() -> TestResult {
        let mut store = store_with_catalog();
        store.fetch_products().await?;

        store.select_product(2)?;
        assert_eq!(store.selected_product().map(|p| p.id), Some(2));

        let result = store.select_product(42);

        assert_eq!(result, Err(CatalogError::NotFound));
        assert_eq!(
            store.selected_product().map(|p| p.id),
            Some(2),
            "failed selection must leave the previous selection unchanged"
        );
        assert_eq!(store.status().error(), Some("Product not found"));

        Ok(())
    }

    #[tokio::test]
    async fn select_product_before_fetch_fails() {
        let mut api = MockCatalogApi::new();
        api.expect_fetch_products().never();

        let mut store = ProductStore::new(api);

        assert_eq!(store.select_product(1), Err(CatalogError::NotFound));
        assert!(store.selected_product().is_none());
    }

    #[tokio::test]
    async fn filter_matches_title_and_category() -> TestResult {
        let mut store = store_with_catalog();
        store.fetch_products().await?;

        store.set_search_query("phone");
        store.set_selected_category(ALL_CATEGORIES);

        let matches: Vec<u64> = store.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(matches, vec![1], "only the iPhone matches \"phone\"");

        store.set_search_query("");
        store.set_selected_category("Footwear");

        let matches: Vec<u64> = store.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(matches, vec![2]);

        // Category search text also matches, independent of the title.
        store.set_search_query("foot");
        let matches: Vec<u64> = store.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(matches, vec![2]);

        Ok(())
    }

    #[tokio::test]
    async fn categories_are_sorted_and_prefixed_with_sentinel() -> TestResult {
        let mut store = store_with_catalog();
        store.fetch_products().await?;

        assert_eq!(
            store.categories(),
            vec!["all", "Electronics", "Footwear", "Home"]
        );

        Ok(())
    }

    #[test]
    fn categories_on_empty_catalog_is_just_the_sentinel() {
        let store = ProductStore::new(MockCatalogApi::new());

        assert_eq!(store.categories(), vec!["all"]);
    }
}
