use serde::Deserialize;

/// One product row as the catalog endpoint returns it.
///
/// Optional fields are normalized at decode time: a missing description
/// becomes empty, missing images become an empty list, and the creation
/// timestamp stays the raw string the API sent. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: CategoryRecord,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "creationAt")]
    pub creation_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed catalog response: {0}")]
    Json(String),
}

/// Decode the products endpoint's JSON array.
pub fn decode_products(bytes: &[u8]) -> Result<Vec<ProductRecord>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::Json(err.to_string()))
}

/// Decode the categories endpoint's JSON array.
pub fn decode_categories(bytes: &[u8]) -> Result<Vec<CategoryRecord>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::Json(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{decode_categories, decode_products};

    #[test]
    fn full_product_row_decodes() {
        let body = br#"[{
            "id": 7,
            "title": "Reading Lamp",
            "price": 25.5,
            "description": "Warm light",
            "category": {"id": 2, "name": "Lighting", "image": "ignored"},
            "images": ["https://img.example/lamp.jpg"],
            "creationAt": "2024-11-05T08:30:00.000Z",
            "updatedAt": "2024-11-06T08:30:00.000Z"
        }]"#;

        let records = decode_products(body).expect("decode ok");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "Reading Lamp");
        assert_eq!(record.price, 25.5);
        assert_eq!(record.category.name, "Lighting");
        assert_eq!(record.images, vec!["https://img.example/lamp.jpg"]);
        assert_eq!(
            record.creation_at.as_deref(),
            Some("2024-11-05T08:30:00.000Z")
        );
    }

    #[test]
    fn sparse_product_row_is_normalized() {
        let body = br#"[{"id": 1, "title": "Bare", "price": 10, "category": {"id": 2, "name": "Misc"}}]"#;

        let records = decode_products(body).expect("decode ok");
        assert_eq!(records[0].description, "");
        assert!(records[0].images.is_empty());
        assert!(records[0].creation_at.is_none());
    }

    #[test]
    fn missing_required_field_fails() {
        let body = br#"[{"id": 1, "price": 10, "category": {"id": 2, "name": "Misc"}}]"#;
        assert!(decode_products(body).is_err());
    }

    #[test]
    fn non_array_payload_fails() {
        assert!(decode_products(br#"{"error": "maintenance"}"#).is_err());
        assert!(decode_categories(b"not json at all").is_err());
    }

    #[test]
    fn categories_decode() {
        let body = br#"[{"id": 1, "name": "Furniture"}, {"id": 2, "name": "Lighting"}]"#;
        let records = decode_categories(body).expect("decode ok");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Lighting");
    }
}
