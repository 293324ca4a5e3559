//! Category index and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::domain::entities::{CategoryDetails, CategoryWithImage, Principal};
use crate::error::AppError;
use crate::state::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One row of the index table.
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Empty when the category has no image.
    pub image_path: String,
    pub updated_at: String,
}

impl From<CategoryWithImage> for CategoryRow {
    fn from(c: CategoryWithImage) -> Self {
        Self {
            id: c.category.id,
            name: c.category.name,
            description: c.category.description,
            image_path: c.image.map(|i| i.path).unwrap_or_default(),
            updated_at: c.category.updated_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Template for the category index page.
///
/// Renders `templates/categories/index.html`.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoryIndexTemplate {
    pub user_name: String,
    pub is_admin: bool,
    pub categories: Vec<CategoryRow>,
}

/// Product line on the detail page.
pub struct ProductRow {
    pub id: i64,
    pub name: String,
}

/// Template for a single category.
///
/// Renders `templates/categories/show.html`.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub user_name: String,
    pub is_admin: bool,
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Empty when the category has no image.
    pub image_path: String,
    pub created_at: String,
    pub updated_at: String,
    pub products: Vec<ProductRow>,
}

impl CategoryShowTemplate {
    fn new(principal: &Principal, details: CategoryDetails) -> Self {
        let CategoryDetails {
            category,
            image,
            products,
        } = details;

        Self {
            user_name: principal.name.clone(),
            is_admin: principal.is_admin(),
            id: category.id,
            name: category.name,
            description: category.description,
            image_path: image.map(|i| i.path).unwrap_or_default(),
            created_at: category.created_at.format(DATE_FORMAT).to_string(),
            updated_at: category.updated_at.format(DATE_FORMAT).to_string(),
            products: products
                .into_iter()
                .map(|p| ProductRow {
                    id: p.id,
                    name: p.name,
                })
                .collect(),
        }
    }
}

/// Renders the list of all categories.
///
/// # Endpoint
///
/// `GET /categories`
pub async fn category_index_handler(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<CategoryIndexTemplate, AppError> {
    let categories = state.category_service.list_categories(&principal).await?;

    Ok(CategoryIndexTemplate {
        user_name: principal.name.clone(),
        is_admin: principal.is_admin(),
        categories: categories.into_iter().map(CategoryRow::from).collect(),
    })
}

/// Renders one category with its image and products.
///
/// # Endpoint
///
/// `GET /categories/{id}`
///
/// # Errors
///
/// Returns 404 if the category does not exist.
pub async fn category_show_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    principal: Principal,
) -> Result<CategoryShowTemplate, AppError> {
    let details = state.category_service.get_category(&principal, id).await?;

    Ok(CategoryShowTemplate::new(&principal, details))
}
