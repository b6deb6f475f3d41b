// src/components/root.rs
use std::sync::Arc;

use super::listing::ProductList;
use super::markup::Markup;
use super::Component;
use crate::catalog::CatalogService;

pub const PAGE_TITLE: &str = "My Products";

/// Page shell: a static header followed by the product list.
pub struct App {
    listing: ProductList,
}

impl App {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            listing: ProductList::new(catalog),
        }
    }

    pub fn mount(&mut self) {
        self.listing.mount();
    }

    pub async fn settled(&mut self) {
        self.listing.settled().await;
    }

    pub fn listing(&self) -> &ProductList {
        &self.listing
    }

    /// Full HTML document around [`Component::render`].
    pub fn render_document(&self) -> String {
        let mut page = Markup::new();
        page.push_raw("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>");
        page.push_text(PAGE_TITLE);
        page.push_raw("</title></head><body>");
        page.push(self.render());
        page.push_raw("</body></html>");
        page.into_string()
    }
}

impl Component for App {
    fn render(&self) -> Markup {
        let mut out = Markup::new();
        out.push_raw(r#"<div class="container"><header class="header"><h1>"#);
        out.push_text(PAGE_TITLE);
        out.push_raw("</h1></header>");
        out.push(self.listing.render());
        out.push_raw("</div>");
        out
    }
}
