//! HTML template rendering handlers.

mod categories;

pub use categories::{
    CategoryIndexTemplate, CategoryShowTemplate, category_index_handler, category_show_handler,
};
