//! Product repository built directly on a [`GraphQLTransport`].
//!
//! Every operation here mutates or reads remote state and none of them are
//! idempotent: deleting an id that is already gone surfaces whatever error
//! Shopify returns.

use catalog_seeder_core::Price;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use tracing::{debug, info, instrument};

use crate::shopify::conversions::{
    convert_created_product, convert_product_page, format_user_errors,
};
use crate::shopify::queries::{
    GetProducts, ProductCreate, ProductDelete, get_products, product_create, product_delete,
};
use crate::shopify::{
    AdminShopifyError, CreatedProduct, DeletedProduct, GraphQLTransport, Product, ProductPage,
    execute_query,
};

use super::bulk_delete::{BulkDeleteReport, BulkDeleter};

/// Largest `first:` Shopify accepts on a connection.
pub const MAX_PAGE_SIZE: i64 = 250;

/// Colors a generated snowboard can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnowboardColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl SnowboardColor {
    pub const ALL: [Self; 4] = [Self::Red, Self::Orange, Self::Yellow, Self::Green];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
        }
    }
}

impl std::fmt::Display for SnowboardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<SnowboardColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SnowboardColor {
        match rng.random_range(0..4u8) {
            0 => SnowboardColor::Red,
            1 => SnowboardColor::Orange,
            2 => SnowboardColor::Yellow,
            _ => SnowboardColor::Green,
        }
    }
}

/// The randomly drawn attributes of a demo product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomProductInput {
    pub color: SnowboardColor,
    /// Whole cents in `[0.00, 100.00)`.
    pub price: Price,
}

impl RandomProductInput {
    /// Draw a color uniformly and a price uniformly from `[0, 100)`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            color: rng.random(),
            price: Price::from_cents(rng.random_range(0..10_000)),
        }
    }

    /// Product title, e.g. `"Red Snowboard"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Snowboard", self.color)
    }
}

/// Product operations against the remote catalog.
#[derive(Debug, Clone)]
pub struct ProductRepository<T> {
    transport: T,
}

impl<T: GraphQLTransport> ProductRepository<T> {
    /// Create a repository over a transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a `"{color} Snowboard"` with a random price.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails, Shopify reports user
    /// errors, or no product comes back.
    pub async fn create_random_product(&self) -> Result<CreatedProduct, AdminShopifyError> {
        let input = RandomProductInput::generate(&mut rand::rng());
        self.create_product(input).await
    }

    /// Create a product from already drawn attributes.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::UserError` when the mutation reports
    /// `userErrors`, `AdminShopifyError::MissingField` when the payload has no
    /// product, and propagates transport errors.
    #[instrument(skip(self, input), fields(title = %input.title(), price = %input.price))]
    pub async fn create_product(
        &self,
        input: RandomProductInput,
    ) -> Result<CreatedProduct, AdminShopifyError> {
        use product_create::{ProductInput, ProductVariantInput, Variables};

        let variables = Variables {
            input: ProductInput {
                title: input.title(),
                variants: vec![ProductVariantInput { price: input.price }],
            },
        };

        let response = execute_query::<ProductCreate, _>(&self.transport, variables).await?;

        let payload = response
            .product_create
            .ok_or_else(|| AdminShopifyError::MissingField("productCreate".to_string()))?;

        if !payload.user_errors.is_empty() {
            return Err(AdminShopifyError::UserError(format_user_errors(
                &payload.user_errors,
            )));
        }

        let product = payload.product.map(convert_created_product).ok_or_else(|| {
            AdminShopifyError::MissingField("productCreate.product".to_string())
        })?;

        info!(product_id = %product.id, handle = %product.handle, "Created product");
        Ok(product)
    }

    /// Fetch up to `page_size` products after `cursor`.
    ///
    /// An absent cursor starts from the beginning. An empty catalog is not an
    /// error: it yields an empty page with no cursor.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::InvalidInput` if `page_size` is outside
    /// `1..=250`, and propagates transport errors.
    #[instrument(skip(self))]
    pub async fn list_products_page(
        &self,
        cursor: Option<&str>,
        page_size: i64,
    ) -> Result<ProductPage, AdminShopifyError> {
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AdminShopifyError::InvalidInput(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE} (got {page_size})"
            )));
        }

        let variables = get_products::Variables {
            first: page_size,
            after: cursor.map(String::from),
        };

        let response = execute_query::<GetProducts, _>(&self.transport, variables).await?;
        let page = convert_product_page(response.products);

        debug!(
            returned = page.products.len(),
            has_next_page = page.has_next_page,
            "Fetched product page"
        );
        Ok(page)
    }

    /// Delete one product by ID.
    ///
    /// The returned handle is carried over from `product`; only the id is
    /// confirmed by Shopify.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::MissingField` if Shopify does not confirm
    /// a deleted id, `AdminShopifyError::UserError` on `userErrors`, and
    /// propagates transport errors.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn delete_product(
        &self,
        product: &Product,
    ) -> Result<DeletedProduct, AdminShopifyError> {
        use product_delete::{ProductDeleteInput, Variables};

        let variables = Variables {
            input: ProductDeleteInput {
                id: product.id.to_string(),
            },
        };

        let response = execute_query::<ProductDelete, _>(&self.transport, variables).await?;

        let payload = response
            .product_delete
            .ok_or_else(|| AdminShopifyError::MissingField("productDelete".to_string()))?;

        if !payload.user_errors.is_empty() {
            return Err(AdminShopifyError::UserError(format_user_errors(
                &payload.user_errors,
            )));
        }

        let id = payload
            .deleted_product_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AdminShopifyError::MissingField("productDelete.deletedProductId".to_string())
            })?;

        Ok(DeletedProduct {
            id,
            handle: product.handle.clone(),
        })
    }

    /// Delete every product in the catalog with the default page sizes.
    ///
    /// See [`BulkDeleter::delete_all_products`].
    ///
    /// # Errors
    ///
    /// Fails on the first page fetch or deletion that fails.
    pub async fn delete_all_products(&self) -> Result<BulkDeleteReport, AdminShopifyError> {
        BulkDeleter::new(self).delete_all_products().await
    }
}
