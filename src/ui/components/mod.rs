pub mod shoe_card;
pub mod shoe_grid;
pub mod toast;
pub mod variant_tag;
