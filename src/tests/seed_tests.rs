#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::seed::{sample_items, seed_if_empty};
    use crate::store::ClothingStore;
    use crate::tests::memory_pool;
    use crate::types::ItemFilter;

    #[test]
    fn test_sample_items_shape() {
        let items = sample_items();
        assert_eq!(items.len(), 8);
        let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories.len(), 6);
        assert!(items.iter().all(|i| i.image_url.starts_with("https://via.placeholder.com/")));
        assert!(items.iter().any(|i| i.size == "10"));
    }

    #[tokio::test]
    async fn test_seed_if_empty_only_seeds_once() {
        let store = ClothingStore::new(memory_pool().await);

        assert_eq!(seed_if_empty(&store).await.unwrap(), 8);
        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_table_has_rows() {
        let store = ClothingStore::new(memory_pool().await);
        let mut first = sample_items().remove(0);
        first.name = "Existing".to_string();
        store.create(&first).await.unwrap();

        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        let all = store.list(&ItemFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Existing");
    }
}
