//! Demo inventory loaded into an empty database at startup.

use crate::error::AppResult;
use crate::store::ClothingStore;
use crate::types::NewClothingItem;

#[allow(clippy::too_many_arguments)]
fn demo_item(
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    size: &str,
    color: &str,
    stock: i64,
    image_text: &str,
) -> NewClothingItem {
    NewClothingItem {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        size: size.to_string(),
        color: color.to_string(),
        stock,
        image_url: format!("https://via.placeholder.com/300x400?text={}", image_text),
    }
}

pub fn sample_items() -> Vec<NewClothingItem> {
    vec![
        demo_item(
            "Classic White T-Shirt",
            "Comfortable cotton t-shirt perfect for everyday wear",
            "Shirts",
            19.99,
            "M",
            "White",
            50,
            "White+T-Shirt",
        ),
        demo_item(
            "Blue Denim Jeans",
            "Classic fit denim jeans with a modern twist",
            "Pants",
            59.99,
            "L",
            "Blue",
            30,
            "Blue+Jeans",
        ),
        demo_item(
            "Black Leather Jacket",
            "Premium leather jacket for a stylish look",
            "Jackets",
            149.99,
            "M",
            "Black",
            15,
            "Leather+Jacket",
        ),
        demo_item("Red Summer Dress", "Light and breezy summer dress", "Dresses", 45.99, "S", "Red", 25, "Red+Dress"),
        demo_item("Gray Hoodie", "Cozy hoodie for cold days", "Hoodies", 39.99, "L", "Gray", 40, "Gray+Hoodie"),
        demo_item(
            "Navy Blue Blazer",
            "Professional blazer for formal occasions",
            "Jackets",
            89.99,
            "M",
            "Navy",
            20,
            "Navy+Blazer",
        ),
        demo_item("White Sneakers", "Comfortable casual sneakers", "Shoes", 69.99, "10", "White", 35, "White+Sneakers"),
        demo_item(
            "Black Yoga Pants",
            "Stretchy and comfortable yoga pants",
            "Pants",
            34.99,
            "M",
            "Black",
            45,
            "Yoga+Pants",
        ),
    ]
}

/// Inserts [`sample_items`] in one batch. Not idempotent; callers check for an
/// empty table first.
pub async fn seed_database(store: &ClothingStore) -> AppResult<u64> {
    let inserted = store.insert_batch(&sample_items()).await?;
    tracing::info!("Successfully seeded database with {} items", inserted);
    Ok(inserted)
}

/// Seeds only when the table is empty. Returns the number of inserted items.
pub async fn seed_if_empty(store: &ClothingStore) -> AppResult<u64> {
    if store.count().await? > 0 {
        tracing::debug!("Inventory not empty, skipping demo data");
        return Ok(0);
    }
    tracing::info!("Database is empty, seeding with sample data...");
    seed_database(store).await
}
