//! Provider identity and the vendor adapter contract

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod errors;
pub mod traits;

pub use errors::{AdapterError, AdapterResult};
pub use traits::DataProviderAdapter;

/// External imagery vendors reachable through the brokerage service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThirdPartyProvider {
	Airbus,
	Planet,
	Maxar,
}

impl ThirdPartyProvider {
	pub fn as_str(&self) -> &'static str {
		match self {
			ThirdPartyProvider::Airbus => "AIRBUS",
			ThirdPartyProvider::Planet => "PLANET",
			ThirdPartyProvider::Maxar => "MAXAR",
		}
	}
}

impl fmt::Display for ThirdPartyProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
