// src/components/listing.rs
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info_span, warn, Instrument};

use super::markup::Markup;
use super::row::product_row;
use super::state::State;
use super::Component;
use crate::catalog::CatalogService;
use crate::dtos::product::RowProps;
use crate::models::product::Product;

/// Fetches the catalog once on mount and renders one row per product.
pub struct ProductList {
    catalog: Arc<dyn CatalogService>,
    products: Arc<State<[Product]>>,
    cancel: CancellationToken,
    mounted: bool,
    fetch: Option<JoinHandle<()>>,
}

impl ProductList {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            products: Arc::new(State::new(Arc::from(Vec::new()))),
            cancel: CancellationToken::new(),
            mounted: false,
            fetch: None,
        }
    }

    /// Starts the one catalog request for this instance. Later calls do nothing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let catalog = Arc::clone(&self.catalog);
        let products = Arc::clone(&self.products);
        let cancel = self.cancel.clone();

        let task = async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Unmounted before products arrived");
                }
                result = catalog.list_products() => match result {
                    Ok(list) if !cancel.is_cancelled() => {
                        debug!(count = list.len(), "Products loaded");
                        products.set(Arc::from(list));
                    }
                    Ok(_) => debug!("Dropping products for unmounted list"),
                    // The list stays empty; nothing is surfaced to the page.
                    Err(e) => warn!(error = %e, "Failed to fetch products"),
                }
            }
        };
        self.fetch = Some(tokio::spawn(task.instrument(info_span!("product_list_fetch"))));
    }

    /// Waits until the mounted fetch has finished, failed or been cancelled.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.fetch.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Product fetch task did not complete");
            }
        }
    }

    /// Cancels an in-flight fetch; its completion becomes a no-op.
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

    pub fn products(&self) -> Arc<[Product]> {
        self.products.get()
    }

    /// Receiver woken whenever the product snapshot is replaced.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[Product]>> {
        self.products.subscribe()
    }
}

impl Component for ProductList {
    fn render(&self) -> Markup {
        let products = self.products.get();
        let mut out = Markup::new();
        out.push_raw(r#"<div class="container main-content">"#);
        out.push(
            products
                .iter()
                .map(|p| product_row(&p.id, &RowProps::from(p)))
                .collect(),
        );
        out.push_raw("</div>");
        out
    }
}

impl Drop for ProductList {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::models::product::{Media, Price};
    use async_trait::async_trait;
    use scraper::{Html, Selector};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn product(id: &str, name: &str, description: &str, image: &str, price: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            media: Media { source: image.into() },
            price: Price { formatted_with_symbol: price.into() },
        }
    }

    struct StubCatalog {
        products: Option<Vec<Product>>,
        calls: AtomicUsize,
    }

    impl StubCatalog {
        fn ok(products: Vec<Product>) -> Arc<Self> {
            Arc::new(Self { products: Some(products), calls: AtomicUsize::new(0) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { products: None, calls: AtomicUsize::new(0) })
        }
    }

    #[async_trait]
    impl CatalogService for StubCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.products.clone().ok_or(CatalogError::Status(503))
        }
    }

    /// Holds the response until released.
    struct GatedCatalog {
        gate: Notify,
        products: Vec<Product>,
    }

    #[async_trait]
    impl CatalogService for GatedCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.gate.notified().await;
            Ok(self.products.clone())
        }
    }

    fn row_keys(html: &Markup) -> Vec<String> {
        let doc = Html::parse_fragment(html.as_str());
        let selector = Selector::parse("div.product").unwrap();
        doc.select(&selector)
            .filter_map(|e| e.value().attr("data-key").map(String::from))
            .collect()
    }

    #[tokio::test]
    async fn starts_empty_before_mount() {
        let list = ProductList::new(StubCatalog::ok(vec![product("a", "A", "", "", "$1")]));
        assert!(list.products().is_empty());
        assert!(row_keys(&list.render()).is_empty());
    }

    #[tokio::test]
    async fn renders_one_row_per_product_in_order() {
        let catalog = StubCatalog::ok(vec![
            product("prod_3", "C", "", "c.png", "$3.00"),
            product("prod_1", "A", "", "a.png", "$1.00"),
            product("prod_2", "B", "", "b.png", "$2.00"),
        ]);
        let mut list = ProductList::new(catalog);
        list.mount();
        list.settled().await;

        let first = list.render();
        assert_eq!(row_keys(&first), ["prod_3", "prod_1", "prod_2"]);
        assert_eq!(list.render(), first);
    }

    #[tokio::test]
    async fn mount_fetches_exactly_once() {
        let catalog = StubCatalog::ok(vec![]);
        let mut list = ProductList::new(catalog.clone());
        list.mount();
        list.mount();
        list.settled().await;
        list.render();
        list.mount();
        list.settled().await;

        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_list_empty() {
        let mut list = ProductList::new(StubCatalog::failing());
        list.mount();
        list.settled().await;

        assert!(list.products().is_empty());
        assert!(row_keys(&list.render()).is_empty());
    }

    #[tokio::test]
    async fn subscribers_see_the_loaded_snapshot() {
        let catalog = Arc::new(GatedCatalog {
            gate: Notify::new(),
            products: vec![product("prod_1", "Shirt", "", "shirt.png", "$15.00")],
        });
        let mut list = ProductList::new(catalog.clone());
        let mut rx = list.subscribe();
        list.mount();

        catalog.gate.notify_one();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);
        list.settled().await;
    }

    #[tokio::test]
    async fn unmount_before_completion_discards_result() {
        let catalog = Arc::new(GatedCatalog {
            gate: Notify::new(),
            products: vec![product("prod_1", "Shirt", "", "shirt.png", "$15.00")],
        });
        let mut list = ProductList::new(catalog.clone());
        list.mount();
        list.unmount();
        catalog.gate.notify_one();
        list.settled().await;

        assert!(list.products().is_empty());
    }

    #[tokio::test]
    async fn dropping_the_list_cancels_the_fetch() {
        let catalog = Arc::new(GatedCatalog { gate: Notify::new(), products: vec![] });
        let mut list = ProductList::new(catalog.clone());
        list.mount();
        let handle = list.fetch.take().unwrap();
        drop(list);

        tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("fetch task still running after drop")
            .unwrap();
    }
}
