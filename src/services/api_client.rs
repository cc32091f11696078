// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Listado paginado de claves de un datastore. No guarda estado: el cursor y
// la lista acumulada viven en BrowserStore.
// ============================================================================

use gloo_net::http::Request;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{EntryPage, ListEntriesQuery, ListEntriesResponse};

/// Errores del listado. `Display` es el mensaje que ve el usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Parse error: {0}")]
    Parse(String),
    /// Campo `error` en una respuesta por lo demás válida
    #[error("{0}")]
    Api(String),
}

/// Cliente del servicio de listado de datastores
#[derive(Clone, Debug, PartialEq)]
pub struct DatastoreClient {
    base_url: String,
}

impl Default for DatastoreClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DatastoreClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.datastore_api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL completa: nombre del datastore codificado en el path,
    /// `cursor` solo si no está vacío
    pub fn list_url(&self, query: &ListEntriesQuery) -> String {
        let target = &query.target;
        let mut url = format!(
            "{}/datastores/{}/entries?universeId={}&apiToken={}&prefix={}",
            self.base_url,
            urlencoding::encode(&target.datastore_name),
            urlencoding::encode(&target.universe_id),
            urlencoding::encode(&target.api_token),
            urlencoding::encode(&query.prefix),
        );
        if !query.cursor.is_empty() {
            url.push_str(&format!("&cursor={}", urlencoding::encode(&query.cursor)));
        }
        url
    }

    /// Listar una página de claves
    pub async fn list_entries(&self, query: &ListEntriesQuery) -> Result<EntryPage, FetchError> {
        let url = self.list_url(query);

        log::debug!(
            "🔍 Listando claves de '{}' (prefix='{}', cursor='{}')",
            query.target.datastore_name,
            query.prefix,
            query.cursor
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        decode_list_response(response.ok(), response.status(), &response.status_text(), &body)
    }
}

/// Convierte la respuesta HTTP en una página o un error.
/// El body se interpreta siempre: un no-2xx con `keys` sigue siendo una página
/// y un no-2xx con `error` es un error de aplicación.
pub fn decode_list_response(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<EntryPage, FetchError> {
    let parsed = serde_json::from_str::<ListEntriesResponse>(body);

    if !ok {
        return match parsed {
            Ok(response) if error_message(&response).is_some() || response.keys.is_some() => {
                into_page(response)
            }
            _ => Err(FetchError::Http {
                status,
                status_text: status_text.to_string(),
            }),
        };
    }

    let response = parsed.map_err(|e| FetchError::Parse(e.to_string()))?;
    into_page(response)
}

/// `error` vacío cuenta como ausente
fn error_message(response: &ListEntriesResponse) -> Option<&str> {
    response.error.as_deref().filter(|message| !message.is_empty())
}

fn into_page(response: ListEntriesResponse) -> Result<EntryPage, FetchError> {
    if let Some(message) = error_message(&response) {
        return Err(FetchError::Api(message.to_string()));
    }

    Ok(EntryPage {
        entries: response
            .keys
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect(),
        next_cursor: response.next_page_cursor.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DatastoreTarget, Entry};

    fn query(prefix: &str, cursor: &str) -> ListEntriesQuery {
        ListEntriesQuery {
            target: DatastoreTarget {
                universe_id: "12345".to_string(),
                api_token: "tok/en+1".to_string(),
                datastore_name: "Player Data".to_string(),
            },
            prefix: prefix.to_string(),
            cursor: cursor.to_string(),
        }
    }

    #[test]
    fn list_url_encodes_path_and_params() {
        let client = DatastoreClient::with_base_url("https://api.example.com/");
        let url = client.list_url(&query("user_", ""));

        assert_eq!(
            url,
            "https://api.example.com/datastores/Player%20Data/entries?universeId=12345&apiToken=tok%2Fen%2B1&prefix=user_"
        );
    }

    #[test]
    fn list_url_adds_cursor_only_when_present() {
        let client = DatastoreClient::with_base_url("http://localhost:3000");
        let url = client.list_url(&query("", "abc=="));

        assert!(url.ends_with("&prefix=&cursor=abc%3D%3D"));
        assert!(!client.list_url(&query("", "")).contains("cursor="));
    }

    #[test]
    fn decodes_last_page() {
        let body = r#"{"keys":[{"key":"a"},{"key":"b"}],"nextPageCursor":""}"#;
        let page = decode_list_response(true, 200, "OK", body).unwrap();

        assert_eq!(page.entries, vec![Entry::new("a"), Entry::new("b")]);
        assert_eq!(page.next_cursor, "");
        assert!(!page.has_more());
    }

    #[test]
    fn missing_keys_is_an_empty_page() {
        let page = decode_list_response(true, 200, "OK", r#"{"nextPageCursor":"n1"}"#).unwrap();
        assert!(page.entries.is_empty());
        assert!(page.has_more());
    }

    #[test]
    fn error_field_becomes_api_error() {
        let err = decode_list_response(true, 200, "OK", r#"{"error":"not found"}"#).unwrap_err();
        assert_eq!(err, FetchError::Api("not found".to_string()));
        assert_eq!(format!("Error: {}", err), "Error: not found");
    }

    #[test]
    fn non_2xx_prefers_body_error() {
        let err = decode_list_response(false, 403, "Forbidden", r#"{"error":"invalid token"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid token");

        let err = decode_list_response(false, 502, "Bad Gateway", "<html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn empty_error_field_is_ignored() {
        let page = decode_list_response(true, 200, "OK", r#"{"keys":[{"key":"a"}],"error":""}"#).unwrap();
        assert_eq!(page.entries, vec![Entry::new("a")]);
    }

    #[test]
    fn non_2xx_with_keys_is_still_a_page() {
        let page = decode_list_response(false, 404, "Not Found", r#"{"keys":[{"key":"a"}]}"#).unwrap();
        assert_eq!(page.entries, vec![Entry::new("a")]);
        assert!(!page.has_more());

        // Sin keys ni error útil: se queda el status HTTP
        let err = decode_list_response(false, 404, "Not Found", r#"{"error":""}"#).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = decode_list_response(true, 200, "OK", "{not json").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: "));
    }
}
