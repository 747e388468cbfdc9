use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// Image shown for listings that come without a picture.
pub const PLACEHOLDER_IMAGE: &str = "./images/placeholder.jpg";

/// Lifetime of a marketplace token, counted from the moment the exchange was sent.
pub const TOKEN_LIFETIME_MS: i64 = 3_600_000;

/// Identity of one bestseller query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    date_range: String,
    genre: String,
}

impl LookupKey {
    pub fn new(date_range: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            date_range: date_range.into(),
            genre: genre.into(),
        }
    }

    pub fn date_range(&self) -> &str {
        &self.date_range
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Key under which the resolved ISBN is kept in the bestseller cache.
    pub fn record_key(&self) -> String {
        format!("{}_{}", self.date_range, self.genre)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    pub value: String,
    #[serde(rename = "expiration", with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Builds a token for an exchange sent at `sent_at`. Any lifetime reported
    /// by the provider is ignored.
    pub fn issued(value: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at: sent_at + Duration::milliseconds(TOKEN_LIFETIME_MS),
        }
    }

    /// Usable until the `expires_at` instant, exclusive.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub title: String,
    pub seller: String,
    pub seller_score: Option<String>,
    pub condition: String,
    pub price: String,
    pub currency: Option<String>,
    pub url: String,
    pub image_url: String,
}

impl From<ItemSummary> for ListingSummary {
    fn from(item: ItemSummary) -> Self {
        let (seller, seller_score) = match item.seller {
            Some(s) => (s.username, s.feedback_percentage),
            None => (String::new(), None),
        };
        let (price, currency) = match item.price {
            Some(p) => (p.value.unwrap_or_default(), p.currency),
            None => (String::new(), None),
        };

        ListingSummary {
            title: item.title,
            seller,
            seller_score,
            condition: item.condition.unwrap_or_default(),
            price,
            currency,
            url: item.item_web_url,
            image_url: item
                .image
                .and_then(|i| i.image_url)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

#[derive(Tabled)]
pub struct ListingTableRow {
    pub title: String,
    pub seller: String,
    pub score: String,
    pub condition: String,
    pub price: String,
    pub link: String,
}

impl From<&ListingSummary> for ListingTableRow {
    fn from(listing: &ListingSummary) -> Self {
        ListingTableRow {
            title: listing.title.clone(),
            seller: listing.seller.clone(),
            score: listing
                .seller_score
                .as_ref()
                .map(|s| format!("{}%", s))
                .unwrap_or_default(),
            condition: listing.condition.clone(),
            price: match &listing.currency {
                Some(currency) => format!("{} {}", listing.price, currency),
                None => listing.price.clone(),
            },
            link: listing.url.clone(),
        }
    }
}

// Books API

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestsellerResponse {
    #[serde(default)]
    pub num_results: u64,
    #[serde(default)]
    pub results: Vec<BestsellerResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestsellerResult {
    #[serde(default)]
    pub isbns: Vec<IsbnEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IsbnEntry {
    #[serde(default)]
    pub isbn10: String,
    #[serde(default)]
    pub isbn13: Option<String>,
}

// Marketplace API

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub item_summaries: Option<Vec<ItemSummary>>,
}

/// One marketplace listing. Every field is optional on the wire; a listing
/// missing its title or link is still shown rather than failing the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    #[serde(default)]
    pub title: String,
    pub seller: Option<Seller>,
    pub condition: Option<String>,
    pub price: Option<Price>,
    #[serde(default)]
    pub item_web_url: String,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(default)]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub feedback_percentage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    #[serde(default, deserialize_with = "string_or_number")]
    pub value: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_url: Option<String>,
}

// The Browse API reports decimals as strings, but numbers show up too.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
