// Readers for archived API responses.
// No network access happens here: callers fetch the payloads however they like
// and hand over bytes, readers or file paths.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::contest::Contest;
use crate::catalog::problem::Problem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API error: {0}")]
    ApiFailed(String),
    #[error("API response has status OK but no result")]
    MissingResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiStatus {
    Ok,
    Failed,
}

/// Envelope shared by every endpoint: `{"status", "comment"?, "result"?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, CatalogError> {
        match self.status {
            ApiStatus::Failed => Err(CatalogError::ApiFailed(
                self.comment.unwrap_or_else(|| "Unknown error".to_string()),
            )),
            ApiStatus::Ok => self.result.ok_or(CatalogError::MissingResult),
        }
    }
}

/// Payload of `problemset.problems`. Problem statistics are not needed by the
/// engine and are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemsetPayload {
    pub problems: Vec<Problem>,
}

fn read_envelope<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, CatalogError> {
    let response: ApiResponse<T> = serde_json::from_reader(reader)?;
    response.into_result()
}

pub fn load_problemset<R: Read>(reader: R) -> Result<Vec<Problem>, CatalogError> {
    let payload: ProblemsetPayload = read_envelope(reader)?;
    log::debug!("Loaded {} problems", payload.problems.len());
    Ok(payload.problems)
}

pub fn load_contests<R: Read>(reader: R) -> Result<Vec<Contest>, CatalogError> {
    let contests: Vec<Contest> = read_envelope(reader)?;
    log::debug!("Loaded {} contests", contests.len());
    Ok(contests)
}

pub fn load_problemset_file(path: &Path) -> Result<Vec<Problem>, CatalogError> {
    let f = File::open(path)?;
    load_problemset(BufReader::new(f))
}

pub fn load_contests_file(path: &Path) -> Result<Vec<Contest>, CatalogError> {
    let f = File::open(path)?;
    load_contests(BufReader::new(f))
}
