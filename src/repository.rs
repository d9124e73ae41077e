use std::collections::HashMap;

use super::prelude::*;
use super::models::Product;

/// In-memory catalog store. Populated at most once per run from the remote
/// catalog; products keep their catalog order, categories keep first-seen
/// order.
#[derive(Debug, Default)]
pub struct Repository {
    products: Vec<Product>,
    index_by_id: HashMap<u64, usize>,
    categories: Vec<String>,
}

impl Repository {
    pub fn populate(&mut self, records: Vec<Product>) -> Result<()> {
        if !self.products.is_empty() {
            bail!("catalog is already populated");
        }

        for (index, product) in records.iter().enumerate() {
            self.index_by_id.insert(product.id, index);
            if !self.categories.iter().any(|known| known == &product.category) {
                self.categories.push(product.category.clone());
            }
        }
        self.products = records;

        Ok(())
    }

    pub fn product_by_id(&self, id: u64) -> Option<&Product> {
        self.index_by_id
            .get(&id)
            .and_then(|&index| self.products.get(index))
    }

    pub fn product_index(&self, id: u64) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub fn product_by_index(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("Produk {id}"),
            price: 10.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    #[test]
    fn populates_once_and_rejects_a_second_load() {
        let mut repository = Repository::default();
        repository
            .populate(vec![product(1, "electronics")])
            .unwrap();
        assert!(repository.populate(vec![product(2, "jewelery")]).is_err());
        assert_eq!(repository.products().len(), 1);
    }

    #[test]
    fn unknown_id_lookup_is_none() {
        let mut repository = Repository::default();
        repository.populate(vec![product(5, "electronics")]).unwrap();
        assert!(repository.product_by_id(99).is_none());
        assert!(repository.product_index(99).is_none());
        assert_eq!(repository.product_by_id(5).unwrap().id, 5);
    }

    #[test]
    fn categories_stay_unique_in_first_seen_order() {
        let mut repository = Repository::default();
        repository
            .populate(vec![
                product(1, "electronics"),
                product(2, "jewelery"),
                product(3, "electronics"),
                product(4, "men's clothing"),
            ])
            .unwrap();
        assert_eq!(
            repository.categories(),
            &["electronics", "jewelery", "men's clothing"]
        );
    }
}
