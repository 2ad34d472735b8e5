//! Wire-format types for the Lavanta commerce backend.
//!
//! The backend speaks JSON with `camelCase` field names and is not fully
//! consistent about identifier spelling (`id` vs `_id`) or list wrapping.
//! The types here absorb both quirks so the rest of the client can work
//! with one canonical representation.

pub mod address;
pub mod cart;
pub mod catalog;
pub mod envelope;
pub mod error;
pub mod favorite;
pub mod order;
pub mod session;
pub mod user;

pub use address::{Address, AddressInput, DefaultAddressKind};
pub use cart::{CartAddRequest, CartItem, CartSummary};
pub use catalog::{
    Category, Pagination, Product, ProductImage, ProductListing, ProductQuery, ProductVariant,
};
pub use envelope::{ShapeError, decode_list};
pub use error::{ApiError, ErrorKind};
pub use favorite::{FavoriteCreated, FavoriteItem, ProductSummary, decode_favorites};
pub use order::{Order, OrderItem, OrderItemVariant, decode_order, decode_orders};
pub use session::Session;
pub use user::{
    ChangePasswordRequest, MessageResponse, ProfileUpdate, RegisterRequest, Token, UserIdentity,
};
