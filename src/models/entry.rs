use serde::{Deserialize, Serialize};

/// Una clave del datastore tal como se muestra en la lista
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
}

impl Entry {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Elemento de `keys` en la respuesta del listado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub key: String,
}

impl From<KeyRecord> for Entry {
    fn from(record: KeyRecord) -> Self {
        Entry { key: record.key }
    }
}

/// Respuesta cruda del endpoint de listado
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEntriesResponse {
    #[serde(default)]
    pub keys: Option<Vec<KeyRecord>>,
    #[serde(rename = "nextPageCursor", default)]
    pub next_page_cursor: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Página ya validada: entradas + cursor ("" = no hay más páginas)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPage {
    pub entries: Vec<Entry>,
    pub next_cursor: String,
}

impl EntryPage {
    pub fn has_more(&self) -> bool {
        !self.next_cursor.is_empty()
    }
}

/// Datastore al que apunta el navegador (props del componente)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatastoreTarget {
    pub universe_id: String,
    pub api_token: String,
    pub datastore_name: String,
}

impl DatastoreTarget {
    pub fn is_ready(&self) -> bool {
        !self.datastore_name.trim().is_empty()
    }
}

/// Parámetros de una petición de listado
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntriesQuery {
    pub target: DatastoreTarget,
    pub prefix: String,
    pub cursor: String,
}
