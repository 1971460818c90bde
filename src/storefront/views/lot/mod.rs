//! Views of a single lot: catalog card, modal detail and basket rows

mod basket_row;
mod card;
mod detail;
mod sold_row;

pub use basket_row::LotBasketRowView;
pub use card::{status_text, LotCardView};
pub use detail::LotDetailView;
pub use sold_row::LotSoldRowView;
