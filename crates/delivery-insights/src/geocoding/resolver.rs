use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::gazetteer::{AddressFields, Gazetteer, FALLBACK_ADDRESS};

/// Structured address handed back to registration and edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub pais: String,
    pub latitude: String,
    pub longitude: String,
}

impl ResolvedAddress {
    /// Placeholder returned when nothing in the gazetteer matches.
    pub fn fallback() -> Self {
        Self::from(&FALLBACK_ADDRESS)
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

impl From<&AddressFields> for ResolvedAddress {
    fn from(fields: &AddressFields) -> Self {
        Self {
            logradouro: fields.logradouro.to_string(),
            numero: fields.numero.to_string(),
            bairro: fields.bairro.to_string(),
            cidade: fields.cidade.to_string(),
            estado: fields.estado.to_string(),
            pais: fields.pais.to_string(),
            latitude: fields.latitude.to_string(),
            longitude: fields.longitude.to_string(),
        }
    }
}

/// Which gazetteer entry produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchInfo {
    pub position: usize,
    pub keyword: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub address: ResolvedAddress,
    pub matched: Option<MatchInfo>,
}

/// Keyword-matching geocoder over a fixed gazetteer.
///
/// `resolve` is pure and never fails. `lookup` additionally waits for the
/// configured latency to model the round-trip of a hosted geocoding
/// provider; the wait is a timer, so concurrent lookups overlap.
#[derive(Debug, Clone)]
pub struct AddressResolver {
    gazetteer: Gazetteer,
    latency: Duration,
}

impl AddressResolver {
    pub fn new(latency: Duration) -> Self {
        Self::with_gazetteer(Gazetteer::brazil(), latency)
    }

    pub fn with_gazetteer(gazetteer: Gazetteer, latency: Duration) -> Self {
        Self { gazetteer, latency }
    }

    /// Resolver that answers without any simulated delay.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn resolve(&self, address: &str) -> ResolvedAddress {
        self.resolve_detailed(address).address
    }

    pub fn resolve_detailed(&self, address: &str) -> Resolution {
        let normalized = normalize(address);
        match self.gazetteer.first_match(&normalized) {
            Some(hit) => Resolution {
                address: ResolvedAddress::from(&hit.entry.address),
                matched: Some(MatchInfo {
                    position: hit.position,
                    keyword: hit.keyword,
                }),
            },
            None => Resolution {
                address: ResolvedAddress::fallback(),
                matched: None,
            },
        }
    }

    pub async fn lookup(&self, address: &str) -> Resolution {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.resolve_detailed(address)
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::instant()
    }
}

fn normalize(address: &str) -> String {
    address.trim().to_lowercase()
}
