use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Queries this short or shorter get no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

static SUGGESTIONS: [(&str, &str); 10] = [
    ("Avenida Paulista, São Paulo, SP", "1"),
    ("Avenida Atlântica, Copacabana, Rio de Janeiro, RJ", "2"),
    ("Parque Ibirapuera, São Paulo, SP", "3"),
    ("Pelourinho, Salvador, BA", "4"),
    ("Avenida Boa Viagem, Recife, PE", "5"),
    ("Esplanada dos Ministérios, Brasília, DF", "6"),
    ("Jardim Botânico, Curitiba, PR", "7"),
    ("Mineirão, Belo Horizonte, MG", "8"),
    ("Avenida Beira Mar, Fortaleza, CE", "9"),
    ("Teatro Amazonas, Manaus, AM", "10"),
];

/// Autocomplete entry offered while typing an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub description: String,
    #[serde(rename = "placeId")]
    pub place_id: String,
}

/// Typeahead over a fixed list of landmark descriptions.
///
/// Matching is a case-insensitive substring test against each description;
/// results keep list order. The query is not trimmed.
#[derive(Debug, Clone)]
pub struct AddressSuggester {
    latency: Duration,
}

impl AddressSuggester {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn suggest(&self, query: &str) -> Vec<AddressSuggestion> {
        if query.chars().count() <= MIN_QUERY_CHARS {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        SUGGESTIONS
            .iter()
            .filter(|(description, _)| description.to_lowercase().contains(&needle))
            .map(|(description, place_id)| AddressSuggestion {
                description: description.to_string(),
                place_id: place_id.to_string(),
            })
            .collect()
    }

    /// Short queries answer immediately; longer ones wait out the latency first.
    pub async fn lookup(&self, query: &str) -> Vec<AddressSuggestion> {
        if query.chars().count() > MIN_QUERY_CHARS && !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.suggest(query)
    }
}

impl Default for AddressSuggester {
    fn default() -> Self {
        Self::instant()
    }
}
