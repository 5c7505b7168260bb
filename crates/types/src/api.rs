use serde::{Deserialize, Serialize};

use crate::pack::Pack;

/// Body of `POST /v1/calculate`.
///
/// `items_count` is decoded as a signed integer so that negative input can
/// be rejected with an explicit error instead of a deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatePacksRequest {
    pub items_count: i64,
}

/// Body of the `POST /v1/calculate` response: the plan, sorted ascending by
/// pack size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatePacksResponse {
    pub packs: Vec<Pack>,
}

/// Body of `POST /v1/pack-sizes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetPackSizesRequest {
    pub sizes: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_request_rejects_unknown_fields() {
        let err = serde_json::from_str::<CalculatePacksRequest>(
            r#"{"items_count": 10, "batch": true}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("batch"));
    }

    #[test]
    fn response_wire_shape() {
        let response = CalculatePacksResponse {
            packs: vec![Pack {
                size: 250,
                count: 2,
            }],
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"packs":[{"size":250,"count":2}]}"#
        );
    }
}
