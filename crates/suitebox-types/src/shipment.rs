//! Shipment, address, and customs types

use serde::{Deserialize, Serialize};

/// Status of a consolidated shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Created, awaiting payment and dispatch
    Pending,
    /// Dispatched, in transit
    InTransit,
    /// Held at destination customs
    Customs,
    /// Delivered to the destination address
    Delivered,
    /// Cancelled before dispatch
    Cancelled,
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InTransit => write!(f, "in_transit"),
            Self::Customs => write!(f, "customs"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Structured destination address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line, serialized as `address` on the wire
    #[serde(rename = "address")]
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Customs declaration attached to a shipment at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsDeclaration {
    /// Sum of declared values across all packages, USD
    pub total_value: f64,
    /// One line item per consolidated package
    pub items: Vec<CustomsItem>,
}

/// Per-package customs line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsItem {
    pub tracking_number: String,
    pub declared_value: Option<f64>,
    pub weight_lbs: Option<f64>,
}

/// Cost breakdown returned from a consolidation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Tiered shipping cost, USD
    pub shipping_cost: f64,
    /// Subscription-tier consolidation fee, USD
    pub consolidation_fee: f64,
    /// Sum of the above, persisted as the shipment cost
    pub total_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_street_serializes_as_address() {
        let addr = Address {
            street: "123 Main St".to_string(),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            zip: "33101".to_string(),
            country: "US".to_string(),
        };
        let json = serde_json::to_value(&addr).unwrap();
        assert_eq!(json["address"], "123 Main St");
        assert!(json.get("street").is_none());
    }

    #[test]
    fn cost_breakdown_uses_snake_case_keys() {
        let breakdown = CostBreakdown {
            shipping_cost: 60.0,
            consolidation_fee: 0.0,
            total_cost: 60.0,
        };
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["shipping_cost"], 60.0);
        assert_eq!(json["consolidation_fee"], 0.0);
        assert_eq!(json["total_cost"], 60.0);
        assert!(json.get("shippingCost").is_none());
    }

    #[test]
    fn customs_declaration_uses_snake_case_keys() {
        let declaration = CustomsDeclaration {
            total_value: 30.0,
            items: vec![CustomsItem {
                tracking_number: "1Z999AA10123456784".to_string(),
                declared_value: Some(10.0),
                weight_lbs: Some(2.0),
            }],
        };
        let json = serde_json::to_value(&declaration).unwrap();
        assert_eq!(json["total_value"], 30.0);
        assert_eq!(json["items"][0]["tracking_number"], "1Z999AA10123456784");
        assert_eq!(json["items"][0]["declared_value"], 10.0);
        assert_eq!(json["items"][0]["weight_lbs"], 2.0);
        assert!(json.get("totalValue").is_none());
    }
}
