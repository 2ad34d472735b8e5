//! The favorites page controller.
//!
//! Keeps an in-memory favorites list in agreement with the remote store
//! across three actions: remove, add-to-cart, and the cart-then-remove
//! cascade. The local list only changes after the corresponding remote
//! call succeeds - there is no optimistic mutation - and every failure is
//! routed through the [`ErrorHandler`] so an authentication failure tears
//! the session down no matter which action raised it.
//!
//! Confirmation is a capability: the controller decides *when* a
//! confirmation is needed and *what* it is about, the rendering layer
//! decides how to ask. Per-item lifecycle:
//!
//! ```text
//! Present --confirm + remote delete ok--> Removed
//! Present --cart add ok-----------------> Present
//! Present --cart add ok + confirm + remote delete ok--> Removed
//! ```

use std::sync::Arc;

use lavanta_core::{ApiError, ErrorKind, FavoriteItem};

use crate::error::ErrorHandler;
use crate::services::{CartService, FavoritesService};

/// A confirmation the controller needs an answer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation<'a> {
    /// Remove an item from the favorites list?
    RemoveFavorite {
        /// Product name to show, when known.
        product_name: Option<&'a str>,
    },
    /// The item landed in the cart; also remove it from favorites?
    RemoveAfterCartAdd {
        /// Product name to show, when known.
        product_name: Option<&'a str>,
    },
}

/// Confirmation capability implemented by the rendering layer.
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the user; `true` means proceed.
    fn confirm(&self, request: &Confirmation<'_>) -> bool;
}

/// What a remove action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user declined; nothing was issued.
    Cancelled,
    /// The remote delete succeeded and the item left the local list.
    Removed,
}

/// What an add-to-cart action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The item is in the cart and still a favorite.
    Added,
    /// The item is in the cart and the cascade removed it from favorites.
    AddedAndRemoved,
}

/// Controller for the favorites page.
pub struct FavoritesPage {
    favorites: FavoritesService,
    cart: CartService,
    errors: ErrorHandler,
    prompt: Arc<dyn ConfirmPrompt>,
    items: Vec<FavoriteItem>,
}

impl FavoritesPage {
    /// Create the controller; the list starts empty until [`load`] runs.
    ///
    /// [`load`]: Self::load
    #[must_use]
    pub fn new(
        favorites: FavoritesService,
        cart: CartService,
        errors: ErrorHandler,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            favorites,
            cart,
            errors,
            prompt,
            items: Vec::new(),
        }
    }

    /// The list as the page should render it: flat and in backend order.
    #[must_use]
    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    /// Fetch the favorites list from the backend.
    ///
    /// # Errors
    ///
    /// On failure the list is reset to empty and the handled error is
    /// returned for the page to render.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.favorites.list().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "favorites loaded");
                self.items = items;
                Ok(())
            }
            Err(error) => {
                self.items.clear();
                Err(self.errors.handle(&error))
            }
        }
    }

    /// Add a product to the favorites collection and refresh the list.
    ///
    /// # Errors
    ///
    /// On failure the local list is left unchanged and the handled error
    /// is returned.
    pub async fn add(&mut self, product_id: &str) -> Result<(), ApiError> {
        match self.favorites.add(product_id).await {
            Ok(created) => {
                tracing::debug!(favorite = %created.id, "favorite added");
            }
            Err(error) => return Err(self.errors.handle(&error)),
        }
        // Re-fetch rather than synthesize an entry: the backend joins in
        // product details the add response does not carry.
        match self.favorites.list().await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(error) => Err(self.errors.handle(&error)),
        }
    }

    /// Remove an item, asking for confirmation first.
    ///
    /// The remote delete is issued only after the user confirms, and the
    /// local list is filtered - by either identifier spelling - only after
    /// the remote call succeeds.
    ///
    /// # Errors
    ///
    /// On failure the local list is left unchanged and the handled error
    /// is returned.
    pub async fn remove(&mut self, id: &str) -> Result<RemoveOutcome, ApiError> {
        let product_name = self
            .items
            .iter()
            .find(|item| item.matches(id))
            .and_then(FavoriteItem::product_name)
            .map(ToOwned::to_owned);

        let request = Confirmation::RemoveFavorite {
            product_name: product_name.as_deref(),
        };
        if !self.prompt.confirm(&request) {
            return Ok(RemoveOutcome::Cancelled);
        }

        self.remove_confirmed(id).await
    }

    /// Transfer an item into the cart, then optionally cascade into a
    /// removal.
    ///
    /// The cart payload carries the product identifier (falling back to
    /// the entry identifier), quantity one, and the variant SKU iff the
    /// entry has one. After a successful add the user is asked once
    /// whether the item should also leave the favorites; accepting runs
    /// the remove flow against the remote store.
    ///
    /// # Errors
    ///
    /// Failure at either step leaves the local list unchanged and returns
    /// the handled error.
    pub async fn add_to_cart(&mut self, id: &str) -> Result<CartOutcome, ApiError> {
        let Some(item) = self.items.iter().find(|item| item.matches(id)) else {
            return Err(ApiError::new(
                ErrorKind::NotFound,
                "Ürün favori listenizde bulunamadı.",
            ));
        };
        let Some(request) = item.cart_request() else {
            return Err(ApiError::new(
                ErrorKind::Unknown,
                "Ürün kimliği eksik olduğu için sepete eklenemedi.",
            ));
        };
        let product_name = item.product_name().map(ToOwned::to_owned);

        if let Err(error) = self.cart.add(&request).await {
            return Err(self.errors.handle(&error));
        }
        tracing::debug!(product = %request.product_id, "favorite transferred to cart");

        let confirmation = Confirmation::RemoveAfterCartAdd {
            product_name: product_name.as_deref(),
        };
        if self.prompt.confirm(&confirmation) {
            self.remove_confirmed(id).await?;
            return Ok(CartOutcome::AddedAndRemoved);
        }

        Ok(CartOutcome::Added)
    }

    /// Issue the remote delete and, on success, drop the item locally.
    async fn remove_confirmed(&mut self, id: &str) -> Result<RemoveOutcome, ApiError> {
        match self.favorites.remove(id).await {
            Ok(_) => {
                self.items.retain(|item| !item.matches(id));
                Ok(RemoveOutcome::Removed)
            }
            Err(error) => Err(self.errors.handle(&error)),
        }
    }
}
