// src/components/row.rs
use super::markup::{escape, Markup};
use crate::dtos::product::RowProps;

/// Renders one product row. `key` is emitted as `data-key` so the row keeps
/// a stable identity across renders.
pub fn product_row(key: &str, props: &RowProps<'_>) -> Markup {
    let mut out = Markup::new();
    out.push_raw(&format!(r#"<div class="row product" data-key="{}">"#, escape(key)));

    out.push_raw(&format!(
        r#"<div class="col-md-2"><img src="{}" alt="{}" height="150"></div>"#,
        escape(props.image),
        escape(props.name)
    ));

    out.push_raw(r#"<div class="col-md-8 product-detail"><h4>"#);
    out.push_text(props.name);
    out.push_raw("</h4><div>");
    out.push(Markup::trusted(props.description));
    out.push_raw("</div></div>");

    out.push_raw(r#"<div class="col-md-2 product-price">"#);
    out.push_text(props.price);
    out.push_raw("</div></div>");
    out
}
