//! Cached Payload Shapes
//!
//! Typed representations of the query results the cache holds, plus the
//! tagged union stored in the shared cache instance. Collaborators
//! (handlers, upstream fetchers) exchange these instead of untyped blobs.

use serde::{Deserialize, Serialize};

// == Token Info ==
/// On-chain state of a single token, as decoded from the contract.
///
/// Numeric reserves and prices stay as decimal strings; precision
/// exceeds what native floats can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub base: String,
    pub quote: String,
    pub reserve0: String,
    pub reserve1: String,
    pub v_reserve0: String,
    pub v_reserve1: String,
    pub max_offers: String,
    pub total_supply: String,
    pub last_price: String,
    pub target: String,
    pub creator: String,
    pub launched: bool,
}

// == Token Metadata ==
/// Off-chain metadata fetched from the token URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
}

// == Token Data ==
/// A full token record as served by the listing and detail queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub id: String,
    pub address: String,
    pub uri: String,
    pub info: Option<TokenInfo>,
    pub launched: bool,
    pub progress: String,
    pub progress_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
}

// == Pagination ==
/// Page cursor attached to list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub has_next: bool,
}

// == Token List Page ==
/// One cached page of the token list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListPage {
    pub tokens: Vec<TokenData>,
    pub token_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

// == Cached Value ==
/// Tagged union of every payload shape the shared cache holds.
///
/// One variant per key namespace; the typed accessors return `None` on a
/// namespace mismatch so callers degrade to a cache miss instead of
/// reading a foreign payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CachedValue {
    List(TokenListPage),
    Detail(Box<TokenData>),
    Metadata(TokenMetadata),
    MetadataBatch(Vec<TokenMetadata>),
    Addresses(Vec<String>),
    Count(u64),
    ContractData(Vec<TokenInfo>),
}

impl CachedValue {
    pub fn as_list(&self) -> Option<&TokenListPage> {
        match self {
            CachedValue::List(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_detail(&self) -> Option<&TokenData> {
        match self {
            CachedValue::Detail(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_metadata(&self) -> Option<&TokenMetadata> {
        match self {
            CachedValue::Metadata(metadata) => Some(metadata),
            _ => None,
        }
    }

    pub fn as_metadata_batch(&self) -> Option<&[TokenMetadata]> {
        match self {
            CachedValue::MetadataBatch(batch) => Some(batch),
            _ => None,
        }
    }

    pub fn as_addresses(&self) -> Option<&[String]> {
        match self {
            CachedValue::Addresses(addresses) => Some(addresses),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            CachedValue::Count(count) => Some(*count),
            _ => None,
        }
    }

    pub fn as_contract_data(&self) -> Option<&[TokenInfo]> {
        match self {
            CachedValue::ContractData(data) => Some(data),
            _ => None,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> TokenData {
        TokenData {
            id: "1".to_string(),
            address: "0xabc".to_string(),
            uri: "ipfs://Qm123".to_string(),
            info: None,
            launched: false,
            progress: "0.5".to_string(),
            progress_percent: 50.0,
            metadata: None,
        }
    }

    #[test]
    fn test_cached_value_accessors() {
        let count = CachedValue::Count(42);
        assert_eq!(count.as_count(), Some(42));
        assert!(count.as_list().is_none());

        let detail = CachedValue::Detail(Box::new(sample_token()));
        assert_eq!(detail.as_detail().unwrap().address, "0xabc");
        assert!(detail.as_count().is_none());

        let addresses = CachedValue::Addresses(vec!["0xa".to_string()]);
        assert_eq!(addresses.as_addresses().unwrap().len(), 1);
    }

    #[test]
    fn test_token_data_camel_case_wire_format() {
        let json = serde_json::to_string(&sample_token()).unwrap();
        assert!(json.contains("\"progressPercent\":50.0"));
        assert!(!json.contains("metadata"));
    }

    #[test]
    fn test_cached_value_roundtrip_serde() {
        let page = CachedValue::List(TokenListPage {
            tokens: vec![sample_token()],
            token_count: 1,
            pagination: Some(Pagination {
                page: 1,
                limit: 20,
                total: 1,
                has_next: false,
            }),
        });

        let json = serde_json::to_string(&page).unwrap();
        let back: CachedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(page, back);
    }
}
