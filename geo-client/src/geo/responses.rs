use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchResult {
    pub esearchresult: ESearchData,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchData {
    /// Missing identifier lists decode as empty rather than failing
    #[serde(default)]
    pub idlist: Vec<String>,
    #[serde(default)]
    pub count: Option<String>,
    /// NCBI reports some failures as a 200 response with an ERROR field
    #[serde(rename = "ERROR", default)]
    pub error: Option<String>,
}
