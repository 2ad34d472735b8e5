//! Bundled client state shared across pages.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ErrorHandler, Navigate};
use crate::pages::favorites::{ConfirmPrompt, FavoritesPage};
use crate::services::{
    AddressesService, AuthService, CartService, CatalogService, FavoritesService, OrdersService,
    ProfileService,
};
use crate::session::SessionStore;
use crate::transport::ApiTransport;

/// All resource services wired over one transport and one session store.
///
/// This struct is cheaply cloneable and is the one thing a page needs to
/// reach the backend.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: ClientConfig,
    transport: ApiTransport,
    auth: AuthService,
    profile: ProfileService,
    orders: OrdersService,
    favorites: FavoritesService,
    addresses: AddressesService,
    cart: CartService,
    catalog: CatalogService,
}

impl Storefront {
    /// Wire every service over the given configuration and session store.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        let transport = ApiTransport::new(config, session);
        Self {
            inner: Arc::new(StorefrontInner {
                config: config.clone(),
                auth: AuthService::new(transport.clone()),
                profile: ProfileService::new(transport.clone()),
                orders: OrdersService::new(transport.clone()),
                favorites: FavoritesService::new(transport.clone()),
                addresses: AddressesService::new(transport.clone()),
                cart: CartService::new(transport.clone()),
                catalog: CatalogService::new(transport.clone()),
                transport,
            }),
        }
    }

    /// The session store every service reads.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        self.inner.transport.session()
    }

    /// Authentication operations.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Profile operations.
    #[must_use]
    pub fn profile(&self) -> &ProfileService {
        &self.inner.profile
    }

    /// Order history operations.
    #[must_use]
    pub fn orders(&self) -> &OrdersService {
        &self.inner.orders
    }

    /// Favorites operations.
    #[must_use]
    pub fn favorites(&self) -> &FavoritesService {
        &self.inner.favorites
    }

    /// Saved address operations.
    #[must_use]
    pub fn addresses(&self) -> &AddressesService {
        &self.inner.addresses
    }

    /// Cart operations.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }

    /// Public catalog operations.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Build an error handler over this client's session store.
    #[must_use]
    pub fn error_handler(&self, navigator: Arc<dyn Navigate>) -> ErrorHandler {
        ErrorHandler::new(
            &self.inner.config,
            self.inner.transport.session().clone(),
            navigator,
        )
    }

    /// Build the favorites page controller with the UI's capabilities.
    #[must_use]
    pub fn favorites_page(
        &self,
        navigator: Arc<dyn Navigate>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> FavoritesPage {
        FavoritesPage::new(
            self.inner.favorites.clone(),
            self.inner.cart.clone(),
            self.error_handler(navigator),
            prompt,
        )
    }
}
