//! Server-rendered page components.

pub mod listing;
pub mod markup;
pub mod row;
pub mod root;
pub mod state;

pub use listing::ProductList;
pub use markup::Markup;
pub use root::App;

/// Something that renders to an HTML fragment from its current state.
pub trait Component {
    fn render(&self) -> Markup;
}
