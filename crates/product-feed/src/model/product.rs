use serde::{Deserialize, Serialize};

/// A single catalog product.
///
/// Instances are created when a page response is deserialized and are
/// immutable afterwards. Identity is `id`; the cache and all lookups key on
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// Absent when the listing has no image for this product; placeholder
    /// selection is the rendering layer's concern.
    pub image: Option<String>,
}

/// One page of the paginated product listing.
///
/// `next_page` absent means the listing is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "data")]
    pub products: Vec<Product>,
    pub next_page: Option<u32>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_response_matches_the_wire_schema() {
        let body = r#"{
            "data": [
                {"id": 7, "title": "Headphones", "description": "Over-ear",
                 "category": "electronics", "price": 99.99, "image": "https://cdn.example/7.jpg"},
                {"id": 8, "title": "Keyboard", "description": "Mechanical",
                 "category": "electronics", "price": 149.5, "image": null}
            ],
            "next_page": 1, "total_pages": 5, "current_page": 0, "total": 50
        }"#;

        let page: PageResponse = serde_json::from_str(body).expect("schema should decode");
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.products[0].id, 7);
        assert_eq!(page.products[1].image, None);
        assert_eq!(page.next_page, Some(1));
        assert_eq!(page.total, 50);
    }

    #[test]
    fn final_page_has_no_next_page() {
        let body = r#"{"data": [], "next_page": null, "total_pages": 1, "current_page": 0, "total": 0}"#;
        let page: PageResponse = serde_json::from_str(body).expect("schema should decode");
        assert_eq!(page.next_page, None);
    }
}
