//! Mock geocoding used to prefill address fields on delivery forms.

pub mod gazetteer;
pub mod resolver;
pub mod router;
pub mod suggestions;

pub use gazetteer::{AddressFields, Gazetteer, GazetteerEntry, GazetteerHit};
pub use resolver::{AddressResolver, MatchInfo, ResolvedAddress, Resolution};
pub use router::{geocode_router, GeocodeEnvelope, GeocodeRequest, SuggestionList, SuggestionQuery};
pub use suggestions::{AddressSuggester, AddressSuggestion};
