use serde::{Deserialize, Serialize};

/// Delivery as served by the backend's `GET /deliveries`.
///
/// Only `peso`, `cidade` and `estado` are required; everything else
/// defaults so partially populated exports still aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub cliente_id: i64,
    pub peso: f64,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub complemento: String,
    pub cidade: String,
    pub estado: String,
    #[serde(default)]
    pub pais: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl DeliveryRecord {
    pub fn new(cidade: impl Into<String>, estado: impl Into<String>, peso: f64) -> Self {
        Self {
            cidade: cidade.into(),
            estado: estado.into(),
            peso,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Client as served by the backend's `GET /clients`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    #[serde(default)]
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let raw = r#"{
            "id": 7,
            "cliente_id": 3,
            "peso": 12.5,
            "endereco": "Av. Boa Viagem, 1000",
            "logradouro": "Avenida Boa Viagem",
            "numero": "1000",
            "bairro": "Boa Viagem",
            "complemento": "Apto 12",
            "cidade": "Recife",
            "estado": "PE",
            "pais": "Brasil",
            "latitude": -8.1208,
            "longitude": -34.8992
        }"#;
        let record: DeliveryRecord = serde_json::from_str(raw).expect("record parses");
        assert_eq!(record.id, 7);
        assert_eq!(record.cliente_id, 3);
        assert_eq!(record.cidade, "Recife");
        assert_eq!(record.complemento, "Apto 12");
    }

    #[test]
    fn partial_record_uses_defaults() {
        let record: DeliveryRecord =
            serde_json::from_str(r#"{"peso": 1.0, "cidade": "Manaus", "estado": "AM"}"#)
                .expect("record parses");
        assert_eq!(record, DeliveryRecord::new("Manaus", "AM", 1.0));
    }
}
