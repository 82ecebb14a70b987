//! Catalog API response types

use serde::Deserialize;

/// `GET /objekts/metadata/{slug}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjektMetadata {
    /// Total issued copies.
    pub total: u64,
    /// Copies currently eligible for transfer between owners.
    pub transferable: u64,
    /// Transfer-eligible share of all copies.
    pub percentage: f64,
    pub metadata: MetadataBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataBody {
    pub description: String,
}

/// `GET /objekts/by-slug/{slug}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjektBySlug {
    #[serde(rename = "collectionNo")]
    pub collection_no: String,
    #[serde(rename = "frontImage")]
    pub front_image: String,
    #[serde(rename = "backImage")]
    pub back_image: String,
}

/// Combined record from both endpoints for one slug.
#[derive(Debug, Clone)]
pub struct ObjektRecord {
    pub metadata: ObjektMetadata,
    pub by_slug: ObjektBySlug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_metadata_payload() {
        let json = r#"{
            "total": 512,
            "transferable": 300,
            "percentage": 58.59,
            "metadata": { "description": "Objekt from the binary01 season" }
        }"#;
        let metadata: ObjektMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.total, 512);
        assert_eq!(metadata.transferable, 300);
        assert_eq!(metadata.metadata.description, "Objekt from the binary01 season");
    }

    #[test]
    fn test_decode_by_slug_payload_uses_camel_case_names() {
        let json = r#"{
            "collectionNo": "207Z",
            "frontImage": "https://imagedelivery.example/front",
            "backImage": "https://imagedelivery.example/back"
        }"#;
        let by_slug: ObjektBySlug = serde_json::from_str(json).unwrap();
        assert_eq!(by_slug.collection_no, "207Z");
        assert_eq!(by_slug.front_image, "https://imagedelivery.example/front");
    }

    #[test]
    fn test_null_body_decodes_to_absent_record() {
        let decoded: Option<ObjektMetadata> = serde_json::from_str("null").unwrap();
        assert!(decoded.is_none());
    }
}
