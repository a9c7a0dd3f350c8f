//! Tenant (brand) records resolved through the directory seam.

// self
use crate::{_prelude::*, directory::TenantId};

/// Business classification assigned to a tenant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenantCategory {
	/// Retail brand.
	#[serde(rename = "RETAILER")]
	Retailer,
	/// Manufacturing brand.
	#[serde(rename = "MANUFACTURER")]
	Manufacturer,
	/// Distribution brand.
	#[serde(rename = "DISTRIBUTOR")]
	Distributor,
	/// Wholesale brand.
	#[serde(rename = "WHOLESALER")]
	Wholesaler,
	/// Online-first brand; the wire label keeps its hyphen.
	#[serde(rename = "E-COMMERCE")]
	ECommerce,
}
impl TenantCategory {
	/// Returns the wire label used by the directory backend.
	pub const fn as_str(self) -> &'static str {
		match self {
			TenantCategory::Retailer => "RETAILER",
			TenantCategory::Manufacturer => "MANUFACTURER",
			TenantCategory::Distributor => "DISTRIBUTOR",
			TenantCategory::Wholesaler => "WHOLESALER",
			TenantCategory::ECommerce => "E-COMMERCE",
		}
	}
}
impl Display for TenantCategory {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Lifecycle status of a tenant within the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
	/// Submitted but not yet vetted.
	Pending,
	/// Vetted and eligible for downstream surfaces.
	Approved,
	/// Vetting failed.
	Rejected,
}
impl TenantStatus {
	/// Returns the wire label used by the directory backend.
	pub const fn as_str(self) -> &'static str {
		match self {
			TenantStatus::Pending => "PENDING",
			TenantStatus::Approved => "APPROVED",
			TenantStatus::Rejected => "REJECTED",
		}
	}
}
impl Display for TenantStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Directory record describing a resource-owning tenant (brand).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
	/// Stable tenant identifier.
	pub id: TenantId,
	/// Human-readable display name.
	pub name: String,
	/// Business classification.
	pub category: TenantCategory,
	/// Lifecycle status; only approved tenants may be embedded.
	pub status: TenantStatus,
}
impl Tenant {
	/// Creates a tenant record.
	pub fn new(
		id: TenantId,
		name: impl Into<String>,
		category: TenantCategory,
		status: TenantStatus,
	) -> Self {
		Self { id, name: name.into(), category, status }
	}

	/// Returns `true` when the tenant may appear in downstream embedded surfaces.
	pub fn is_embeddable(&self) -> bool {
		matches!(self.status, TenantStatus::Approved)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn fixture(status: TenantStatus) -> Tenant {
		let id = TenantId::new("b1").expect("Tenant fixture should be valid.");

		Tenant::new(id, "Brand One", TenantCategory::Retailer, status)
	}

	#[test]
	fn only_approved_tenants_are_embeddable() {
		assert!(fixture(TenantStatus::Approved).is_embeddable());
		assert!(!fixture(TenantStatus::Pending).is_embeddable());
		assert!(!fixture(TenantStatus::Rejected).is_embeddable());
	}

	#[test]
	fn category_wire_labels_keep_the_hyphen() {
		let payload = serde_json::to_string(&TenantCategory::ECommerce)
			.expect("Category should serialize to JSON.");

		assert_eq!(payload, "\"E-COMMERCE\"");

		let round_trip: TenantCategory = serde_json::from_str("\"E-COMMERCE\"")
			.expect("Category should deserialize from JSON.");

		assert_eq!(round_trip, TenantCategory::ECommerce);
		assert_eq!(TenantCategory::Wholesaler.as_str(), "WHOLESALER");
	}

	#[test]
	fn status_wire_labels_round_trip() {
		let payload =
			serde_json::to_string(&TenantStatus::Approved).expect("Status should serialize.");

		assert_eq!(payload, "\"APPROVED\"");

		let round_trip: TenantStatus =
			serde_json::from_str("\"REJECTED\"").expect("Status should deserialize.");

		assert_eq!(round_trip, TenantStatus::Rejected);
	}
}
