//! GraphQL operation definitions for Shopify Admin API.
//!
//! Each operation implements `graphql_client::GraphQLQuery` and exposes the
//! same module layout `graphql_client` codegen produces (`QUERY`,
//! `OPERATION_NAME`, `Variables`, `ResponseData`), so callers can run them
//! through `execute_query::<Op, _>`.

use graphql_client::{GraphQLQuery, QueryBody};

// =============================================================================
// Product queries
// =============================================================================

/// `productCreate` with a single priced variant.
pub struct ProductCreate;

/// `products(first, after)` listing ids and handles.
pub struct GetProducts;

/// `productDelete` by ID.
pub struct ProductDelete;

pub mod product_create {
    use catalog_seeder_core::{Price, ProductStatus};
    use serde::{Deserialize, Serialize};

    use crate::shopify::types::UserError;

    pub const OPERATION_NAME: &str = "populateProduct";
    pub const QUERY: &str = r"mutation populateProduct($input: ProductInput!) {
  productCreate(input: $input) {
    product {
      id
      title
      handle
      status
      variants(first: 10) {
        edges {
          node {
            id
            price
            barcode
            createdAt
          }
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: ProductInput,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct ProductInput {
        pub title: String,
        pub variants: Vec<ProductVariantInput>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct ProductVariantInput {
        pub price: Price,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_create: Option<ProductCreateProductCreate>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductCreateProductCreate {
        pub product: Option<ProductCreateProductCreateProduct>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductCreateProductCreateProduct {
        pub id: String,
        pub title: String,
        pub handle: String,
        pub status: ProductStatus,
        pub variants: ProductCreateProductCreateProductVariants,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductCreateProductCreateProductVariants {
        pub edges: Vec<ProductCreateProductCreateProductVariantsEdges>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductCreateProductCreateProductVariantsEdges {
        pub node: ProductCreateProductCreateProductVariantsEdgesNode,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductCreateProductCreateProductVariantsEdgesNode {
        pub id: String,
        pub price: Price,
        pub barcode: Option<String>,
        pub created_at: Option<String>,
    }
}

impl GraphQLQuery for ProductCreate {
    type Variables = product_create::Variables;
    type ResponseData = product_create::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: product_create::QUERY,
            operation_name: product_create::OPERATION_NAME,
        }
    }
}

pub mod get_products {
    use serde::{Deserialize, Serialize};

    use crate::shopify::types::PageInfo;

    pub const OPERATION_NAME: &str = "getProducts";
    pub const QUERY: &str = r"query getProducts($first: Int!, $after: String) {
  products(first: $first, after: $after) {
    pageInfo {
      endCursor
      hasNextPage
    }
    nodes {
      id
      handle
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
        pub after: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: GetProductsProducts,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GetProductsProducts {
        pub page_info: PageInfo,
        #[serde(default)]
        pub nodes: Vec<GetProductsProductsNodes>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetProductsProductsNodes {
        pub id: String,
        pub handle: String,
    }
}

impl GraphQLQuery for GetProducts {
    type Variables = get_products::Variables;
    type ResponseData = get_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_products::QUERY,
            operation_name: get_products::OPERATION_NAME,
        }
    }
}

pub mod product_delete {
    use serde::{Deserialize, Serialize};

    use crate::shopify::types::UserError;

    pub const OPERATION_NAME: &str = "deleteProduct";
    pub const QUERY: &str = r"mutation deleteProduct($input: ProductDeleteInput!) {
  productDelete(input: $input) {
    deletedProductId
    userErrors {
      field
      message
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: ProductDeleteInput,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct ProductDeleteInput {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_delete: Option<ProductDeleteProductDelete>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductDeleteProductDelete {
        pub deleted_product_id: Option<String>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }
}

impl GraphQLQuery for ProductDelete {
    type Variables = product_delete::Variables;
    type ResponseData = product_delete::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: product_delete::QUERY,
            operation_name: product_delete::OPERATION_NAME,
        }
    }
}
