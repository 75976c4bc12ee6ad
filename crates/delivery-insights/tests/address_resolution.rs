use delivery_insights::geocoding::{AddressResolver, Gazetteer, ResolvedAddress};

fn resolver() -> AddressResolver {
    AddressResolver::instant()
}

#[test]
fn empty_address_resolves_to_placeholder() {
    assert_eq!(resolver().resolve(""), ResolvedAddress::fallback());
}

#[test]
fn paulista_resolves_to_bela_vista_record() {
    let resolved = resolver().resolve("Avenida Paulista, São Paulo");
    assert_eq!(
        resolved,
        ResolvedAddress {
            logradouro: "Avenida Paulista".to_string(),
            numero: "1000".to_string(),
            bairro: "Bela Vista".to_string(),
            cidade: "São Paulo".to_string(),
            estado: "SP".to_string(),
            pais: "Brasil".to_string(),
            latitude: "-23.5632".to_string(),
            longitude: "-46.6542".to_string(),
        }
    );
}

#[test]
fn unknown_address_resolves_to_placeholder() {
    let resolved = resolver().resolve("algum lugar desconhecido");
    assert_eq!(resolved.logradouro, "Rua Principal");
    assert_eq!(resolved.numero, "123");
    assert_eq!(resolved.bairro, "Centro");
    assert_eq!(resolved.cidade, "Cidade Exemplo");
    assert_eq!(resolved.estado, "UF");
    assert_eq!(resolved.pais, "Brasil");
    assert_eq!(resolved.latitude, "-15.7801");
    assert_eq!(resolved.longitude, "-47.9292");
}

#[test]
fn ambiguous_address_picks_first_declared_entry() {
    let entries = Gazetteer::brazil().entries();
    let paulista = entries
        .iter()
        .position(|entry| entry.keywords.contains(&"paulista"))
        .expect("paulista entry present");
    let copacabana = entries
        .iter()
        .position(|entry| entry.keywords.contains(&"copacabana"))
        .expect("copacabana entry present");
    let expected = entries[paulista.min(copacabana)].address.cidade;

    for query in [
        "Copacabana ou Paulista",
        "paulista perto de copacabana",
        "COPACABANA / PAULISTA",
    ] {
        let resolution = resolver().resolve_detailed(query);
        assert_eq!(resolution.address.cidade, expected, "query: {query}");
        assert_eq!(
            resolution.matched.map(|hit| hit.position),
            Some(paulista.min(copacabana))
        );
    }
}

#[test]
fn short_state_codes_shadow_later_entries() {
    // "curitiba" contains "ba", which belongs to the Salvador entry declared earlier.
    let resolution = resolver().resolve_detailed("Jardim Botânico, Curitiba");
    assert_eq!(resolution.address.cidade, "Salvador");
    assert_eq!(resolution.matched.map(|hit| hit.keyword), Some("ba"));
}

#[test]
fn every_landmark_is_reachable_by_its_city_keyword() {
    let cases = [
        ("Largo do Pelourinho, Salvador", "Salvador"),
        ("Avenida Boa Viagem, Recife", "Recife"),
        ("Distrito Federal, Brasília", "Brasília"),
        ("Mineirão, Belo Horizonte", "Belo Horizonte"),
        ("Avenida Beira Mar, Fortaleza", "Fortaleza"),
        ("Teatro Amazonas, Manaus", "Manaus"),
        ("Parque Ibirapuera", "São Paulo"),
    ];

    for (query, cidade) in cases {
        assert_eq!(resolver().resolve(query).cidade, cidade, "query: {query}");
    }
}
