pub mod header;
pub mod filter_bar;
pub mod project_card;
pub mod project_gallery;
