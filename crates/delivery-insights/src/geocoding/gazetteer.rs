//! Fixed table of Brazilian landmarks backing the mock geocoder.
//!
//! Entries are scanned in declaration order and the first one owning a
//! keyword contained in the query wins, so reordering this table changes
//! resolution results. Short state codes such as `"ba"` or `"sp"` match
//! inside longer words ("curiti**ba**"), which lets earlier entries shadow
//! later ones.

/// Address fields as stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFields {
    pub logradouro: &'static str,
    pub numero: &'static str,
    pub bairro: &'static str,
    pub cidade: &'static str,
    pub estado: &'static str,
    pub pais: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
}

/// One landmark together with the lowercase keywords that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GazetteerEntry {
    pub keywords: &'static [&'static str],
    pub address: AddressFields,
}

impl GazetteerEntry {
    /// First keyword of this entry contained in `normalized`, if any.
    pub fn matching_keyword(&self, normalized: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .copied()
            .find(|keyword| normalized.contains(keyword))
    }
}

/// Record returned when no entry matches.
pub const FALLBACK_ADDRESS: AddressFields = AddressFields {
    logradouro: "Rua Principal",
    numero: "123",
    bairro: "Centro",
    cidade: "Cidade Exemplo",
    estado: "UF",
    pais: "Brasil",
    latitude: "-15.7801",
    longitude: "-47.9292",
};

static BRAZIL: [GazetteerEntry; 10] = [
    GazetteerEntry {
        keywords: &["paulista", "são paulo", "sp", "bela vista"],
        address: AddressFields {
            logradouro: "Avenida Paulista",
            numero: "1000",
            bairro: "Bela Vista",
            cidade: "São Paulo",
            estado: "SP",
            pais: "Brasil",
            latitude: "-23.5632",
            longitude: "-46.6542",
        },
    },
    GazetteerEntry {
        keywords: &["copacabana", "rio", "rio de janeiro", "rj"],
        address: AddressFields {
            logradouro: "Avenida Atlântica",
            numero: "500",
            bairro: "Copacabana",
            cidade: "Rio de Janeiro",
            estado: "RJ",
            pais: "Brasil",
            latitude: "-22.9671",
            longitude: "-43.1869",
        },
    },
    GazetteerEntry {
        keywords: &["ibirapuera", "parque"],
        address: AddressFields {
            logradouro: "Avenida Pedro Álvares Cabral",
            numero: "s/n",
            bairro: "Vila Mariana",
            cidade: "São Paulo",
            estado: "SP",
            pais: "Brasil",
            latitude: "-23.5874",
            longitude: "-46.6576",
        },
    },
    GazetteerEntry {
        keywords: &["salvador", "bahia", "ba", "pelourinho"],
        address: AddressFields {
            logradouro: "Largo do Pelourinho",
            numero: "10",
            bairro: "Pelourinho",
            cidade: "Salvador",
            estado: "BA",
            pais: "Brasil",
            latitude: "-12.9739",
            longitude: "-38.5108",
        },
    },
    GazetteerEntry {
        keywords: &["recife", "pernambuco", "pe", "boa viagem"],
        address: AddressFields {
            logradouro: "Avenida Boa Viagem",
            numero: "1000",
            bairro: "Boa Viagem",
            cidade: "Recife",
            estado: "PE",
            pais: "Brasil",
            latitude: "-8.1208",
            longitude: "-34.8992",
        },
    },
    GazetteerEntry {
        keywords: &["brasília", "brasilia", "df", "distrito federal", "esplanada"],
        address: AddressFields {
            logradouro: "Esplanada dos Ministérios",
            numero: "s/n",
            bairro: "Zona Cívico-Administrativa",
            cidade: "Brasília",
            estado: "DF",
            pais: "Brasil",
            latitude: "-15.7989",
            longitude: "-47.8649",
        },
    },
    GazetteerEntry {
        keywords: &["curitiba", "paraná", "parana", "pr", "jardim botânico"],
        address: AddressFields {
            logradouro: "Rua Engenheiro Ostoja Roguski",
            numero: "350",
            bairro: "Jardim Botânico",
            cidade: "Curitiba",
            estado: "PR",
            pais: "Brasil",
            latitude: "-25.4412",
            longitude: "-49.2362",
        },
    },
    GazetteerEntry {
        keywords: &["belo horizonte", "minas", "mg", "mineirão", "mineirao"],
        address: AddressFields {
            logradouro: "Avenida Antônio Abrahão Caram",
            numero: "1001",
            bairro: "Pampulha",
            cidade: "Belo Horizonte",
            estado: "MG",
            pais: "Brasil",
            latitude: "-19.8657",
            longitude: "-43.9711",
        },
    },
    GazetteerEntry {
        keywords: &["fortaleza", "ceará", "ceara", "ce", "beira mar"],
        address: AddressFields {
            logradouro: "Avenida Beira Mar",
            numero: "500",
            bairro: "Meireles",
            cidade: "Fortaleza",
            estado: "CE",
            pais: "Brasil",
            latitude: "-3.7319",
            longitude: "-38.5089",
        },
    },
    GazetteerEntry {
        keywords: &["manaus", "amazonas", "am", "teatro amazonas"],
        address: AddressFields {
            logradouro: "Avenida Eduardo Ribeiro",
            numero: "659",
            bairro: "Centro",
            cidade: "Manaus",
            estado: "AM",
            pais: "Brasil",
            latitude: "-3.1303",
            longitude: "-60.0231",
        },
    },
];

/// A hit in the gazetteer: which entry, at which position, via which keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GazetteerHit {
    pub position: usize,
    pub keyword: &'static str,
    pub entry: &'static GazetteerEntry,
}

/// Ordered, immutable landmark table.
#[derive(Debug, Clone, Copy)]
pub struct Gazetteer {
    entries: &'static [GazetteerEntry],
}

impl Gazetteer {
    pub const fn new(entries: &'static [GazetteerEntry]) -> Self {
        Self { entries }
    }

    /// The built-in table of Brazilian landmarks.
    pub fn brazil() -> Self {
        Self::new(&BRAZIL)
    }

    pub fn entries(&self) -> &'static [GazetteerEntry] {
        self.entries
    }

    /// Linear scan in declaration order; stops at the first entry with a
    /// keyword contained in `normalized`.
    pub fn first_match(&self, normalized: &str) -> Option<GazetteerHit> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(position, entry)| {
                entry.matching_keyword(normalized).map(|keyword| GazetteerHit {
                    position,
                    keyword,
                    entry,
                })
            })
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::brazil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_lowercase_and_present() {
        for entry in Gazetteer::brazil().entries() {
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.address.cidade);
            for keyword in entry.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
            assert_eq!(entry.address.pais, "Brasil");
        }
    }

    #[test]
    fn first_match_reports_position_and_keyword() {
        let hit = Gazetteer::brazil()
            .first_match("praia de copacabana")
            .expect("copacabana is known");
        assert_eq!(hit.position, 1);
        assert_eq!(hit.keyword, "copacabana");
        assert_eq!(hit.entry.address.estado, "RJ");
    }

    #[test]
    fn empty_query_has_no_match() {
        assert!(Gazetteer::brazil().first_match("").is_none());
    }
}
