use serde::Deserialize;

/// Body of `POST /invoke`: a contract function name plus its flat argument list.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}
