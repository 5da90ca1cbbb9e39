pub mod catalog;
pub mod inspect_link;
pub mod inventory_payload;
pub mod item_csfloat;
pub mod lenient;
pub mod name_tag;
