//! Canned-response transport shared by the mode tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::translation::{BoxError, Client, ClientConfig, Field, Transport};

pub struct CannedTransport {
    body: &'static str,
    calls: Mutex<Vec<(String, Vec<Field>)>>,
}

#[async_trait]
impl Transport for CannedTransport {
    async fn post_form(&self, url: &str, form: &[Field]) -> Result<Bytes, BoxError> {
        self.calls
            .lock()
            .map_err(|e| e.to_string())?
            .push((url.to_string(), form.to_vec()));
        Ok(Bytes::from_static(self.body.as_bytes()))
    }
}

#[allow(clippy::unwrap_used)]
pub fn canned_client(
    body: &'static str,
) -> (Client<Arc<CannedTransport>>, Arc<CannedTransport>) {
    let transport = Arc::new(CannedTransport {
        body,
        calls: Mutex::new(Vec::new()),
    });
    let client = Client::with_transport(
        ClientConfig::new("test-key").with_base_url("http://mock.local"),
        Arc::clone(&transport),
    )
    .unwrap();
    (client, transport)
}

#[allow(clippy::unwrap_used)]
pub fn requests(transport: &CannedTransport) -> Vec<String> {
    transport
        .calls
        .lock()
        .unwrap()
        .iter()
        .map(|(url, _)| url.clone())
        .collect()
}

#[allow(clippy::unwrap_used)]
pub fn last_form(transport: &CannedTransport) -> Vec<Field> {
    transport.calls.lock().unwrap().last().unwrap().1.clone()
}
