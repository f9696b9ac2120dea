//! Deployment record persisted for the frontend

use alloy_primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connection metadata the frontend reads to reach the deployed contract
///
/// Serializes to `{"contractAddress", "chainId", "deployTime"}` with the
/// address in EIP-55 checksum form and the time as an ISO-8601 UTC string
/// with millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
	pub contract_address: String,
	pub chain_id: u64,
	#[serde(with = "iso8601_millis")]
	pub deploy_time: DateTime<Utc>,
}

impl DeploymentRecord {
	/// Build a record for a contract deployed now
	pub fn new(address: Address, chain_id: u64) -> Self {
		Self::at(address, chain_id, Utc::now())
	}

	/// Build a record with an explicit deployment time
	///
	/// # Arguments
	/// * `address` - Deployed contract address, stored in checksum form
	/// * `chain_id` - Chain id reported by the node after deployment
	/// * `deploy_time` - Time the deployment was confirmed
	pub fn at(address: Address, chain_id: u64, deploy_time: DateTime<Utc>) -> Self {
		Self {
			contract_address: address.to_checksum(None),
			chain_id,
			deploy_time,
		}
	}
}

mod iso8601_millis {
	use chrono::{DateTime, SecondsFormat, Utc};
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
		let raw = String::deserialize(deserializer)?;
		DateTime::parse_from_rfc3339(&raw)
			.map(|time| time.with_timezone(&Utc))
			.map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use chrono::TimeZone;

	fn fixed_time() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
	}

	#[test]
	fn serializes_with_frontend_keys() {
		let record = DeploymentRecord::at(
			address!("5fbdb2315678afecb367f032d93f642f64180aa3"),
			10143,
			fixed_time(),
		);

		let json = serde_json::to_string(&record).unwrap();
		assert_eq!(
			json,
			r#"{"contractAddress":"0x5FbDB2315678afecb367f032d93F642f64180aa3","chainId":10143,"deployTime":"2026-10-17T09:30:00.000Z"}"#
		);
	}

	#[test]
	fn deploy_time_parses_back() {
		let record = DeploymentRecord::new(Address::ZERO, 1);
		let json = serde_json::to_value(&record).unwrap();
		let raw = json["deployTime"].as_str().unwrap();

		assert!(DateTime::parse_from_rfc3339(raw).is_ok());
		assert!(raw.ends_with('Z'));
		assert_eq!(raw.len(), "2026-10-17T09:30:00.000Z".len());
	}
}
