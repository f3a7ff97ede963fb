use std::collections::BTreeMap;

use trivia_db::models::Category;

pub mod routes;

pub use routes::routes;

/// Ascending id→type map, the shape both category listings and the question
/// listing put on the wire.
pub(crate) fn category_map(categories: &[Category]) -> BTreeMap<i64, &str> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.as_str()))
        .collect()
}
