use crate::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://db.ygoprodeck.com/api/v7";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Card metadata as served by the YGOPRODeck `cardinfo.php` endpoint.
///
/// Only the fields the viewer displays are modeled; the API sends more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetail {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub race: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub card_images: Vec<CardImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardImage {
    pub image_url: String,
}

#[derive(Deserialize)]
struct CardInfoResponse {
    #[serde(default)]
    data: Vec<CardDetail>,
}

/// Lookup key for one card. The passcode is preferred; the name is the
/// fallback for records that have not been through `update-ids` yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardKey {
    Id(u64),
    Name(String),
}

impl CardKey {
    pub fn new(id: Option<u64>, name: &str) -> Self {
        match id {
            Some(id) => CardKey::Id(id),
            None => CardKey::Name(name.to_string()),
        }
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKey::Id(id) => write!(f, "#{}", id),
            CardKey::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Read-only client for the remote card-info API.
#[derive(Debug, Clone)]
pub struct CardApi {
    client: Client,
    base_url: String,
}

impl CardApi {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one card, preferring the passcode over the name.
    pub async fn fetch(&self, key: &CardKey) -> Result<CardDetail> {
        match key {
            CardKey::Id(id) => self.fetch_by_id(*id).await,
            CardKey::Name(name) => self.fetch_by_name(name).await,
        }
    }

    pub async fn fetch_by_id(&self, id: u64) -> Result<CardDetail> {
        let cards = self.cardinfo(&[("id", id.to_string())]).await?;
        first(cards)
    }

    /// Exact-name lookup.
    pub async fn fetch_by_name(&self, name: &str) -> Result<CardDetail> {
        let cards = self.cardinfo(&[("name", name.to_string())]).await?;
        first(cards)
    }

    /// Fuzzy-name lookup. Returns every match so callers can prefer an
    /// exact case-insensitive hit among them.
    pub async fn fetch_by_fuzzy_name(&self, name: &str) -> Result<Vec<CardDetail>> {
        self.cardinfo(&[("fname", name.to_string())]).await
    }

    /// Every card printed in the named set. Used by `fill-pack`.
    pub async fn fetch_cardset(&self, pack_name: &str) -> Result<Vec<CardDetail>> {
        self.cardinfo(&[("cardset", pack_name.to_string())]).await
    }

    async fn cardinfo(&self, query: &[(&str, String)]) -> Result<Vec<CardDetail>> {
        let url = format!("{}/cardinfo.php", self.base_url);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: CardInfoResponse =
            serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))?;
        if parsed.data.is_empty() {
            return Err(Error::NotFound);
        }
        Ok(parsed.data)
    }
}

fn first(mut cards: Vec<CardDetail>) -> Result<CardDetail> {
    if cards.is_empty() {
        return Err(Error::NotFound);
    }
    Ok(cards.swap_remove(0))
}
