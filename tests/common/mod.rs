#![allow(dead_code)]

use std::{
    collections::HashSet,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use shelfscout::{
    clock::Clock,
    ebay::Marketplace,
    error::{SearchError, SearchResult, StoreError},
    management::{KeyValueStore, MemoryStore, Namespace},
    nytimes::RankingProvider,
    types::{
        AccessToken, BestsellerResponse, BestsellerResult, CredentialResponse, Image,
        IsbnEntry, ItemSearchResponse, ItemSummary, LookupKey, Price, Seller,
    },
};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap()
}

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn ranking(isbns: &[&str]) -> BestsellerResponse {
    BestsellerResponse {
        num_results: isbns.len() as u64,
        results: isbns
            .iter()
            .map(|isbn| BestsellerResult {
                isbns: vec![IsbnEntry {
                    isbn10: isbn.to_string(),
                    isbn13: None,
                }],
            })
            .collect(),
    }
}

/// Ranking provider answering every lookup with the same response.
pub struct StubProvider {
    response: Option<BestsellerResponse>,
    calls: AtomicUsize,
    keys: Mutex<Vec<LookupKey>>,
}

impl StubProvider {
    pub fn returning(response: BestsellerResponse) -> Self {
        Self {
            response: Some(response),
            calls: AtomicUsize::new(0),
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<LookupKey> {
        self.keys.lock().unwrap().clone()
    }
}

impl RankingProvider for StubProvider {
    async fn bestsellers(&self, key: &LookupKey) -> SearchResult<BestsellerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().unwrap().push(key.clone());
        self.response
            .clone()
            .ok_or_else(|| SearchError::Upstream("connection refused".to_string()))
    }
}

pub fn item(title: &str, image_url: Option<&str>) -> ItemSummary {
    ItemSummary {
        title: title.to_string(),
        seller: Some(Seller {
            username: format!("{}-seller", title),
            feedback_percentage: Some("99.1".to_string()),
        }),
        condition: Some("Used".to_string()),
        price: Some(Price {
            value: Some("12.50".to_string()),
            currency: Some("USD".to_string()),
        }),
        item_web_url: format!("https://www.ebay.com/itm/{}", title),
        image: image_url.map(|url| Image {
            image_url: Some(url.to_string()),
        }),
    }
}

/// Marketplace double issuing `token-1`, `token-2`, ... and answering
/// searches with a fixed item list.
pub struct StubMarketplace {
    items: Option<Vec<ItemSummary>>,
    exchange_fails: bool,
    reported_expires_in: Option<u64>,
    rejected_tokens: Mutex<HashSet<String>>,
    clock_during_exchange: Option<(Arc<ManualClock>, Duration)>,
    exchanges: AtomicUsize,
    searches: AtomicUsize,
    queries: Mutex<Vec<(String, String)>>,
}

impl StubMarketplace {
    pub fn with_items(items: Vec<ItemSummary>) -> Self {
        Self {
            items: Some(items),
            exchange_fails: false,
            reported_expires_in: Some(7200),
            rejected_tokens: Mutex::new(HashSet::new()),
            clock_during_exchange: None,
            exchanges: AtomicUsize::new(0),
            searches: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Search responses without an `itemSummaries` field.
    pub fn without_items() -> Self {
        Self {
            items: None,
            ..Self::with_items(Vec::new())
        }
    }

    pub fn failing_exchange(mut self) -> Self {
        self.exchange_fails = true;
        self
    }

    pub fn reporting_expires_in(mut self, seconds: u64) -> Self {
        self.reported_expires_in = Some(seconds);
        self
    }

    /// Moves the clock while the exchange is in flight.
    pub fn slow_exchange(mut self, clock: Arc<ManualClock>, delay: Duration) -> Self {
        self.clock_during_exchange = Some((clock, delay));
        self
    }

    pub fn reject(&self, token: &str) {
        self.rejected_tokens
            .lock()
            .unwrap()
            .insert(token.to_string());
    }

    pub fn exchanges(&self) -> usize {
        self.exchanges.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    /// `(query, bearer token)` of every search.
    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

impl Marketplace for StubMarketplace {
    async fn exchange_credentials(&self) -> SearchResult<CredentialResponse> {
        let n = self.exchanges.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((clock, delay)) = &self.clock_during_exchange {
            clock.advance(*delay);
        }
        if self.exchange_fails {
            return Err(SearchError::Upstream(
                "credential exchange responded with 500".to_string(),
            ));
        }

        Ok(CredentialResponse {
            access_token: format!("token-{}", n),
            expires_in: self.reported_expires_in,
            token_type: Some("Application Access Token".to_string()),
        })
    }

    async fn search_items(&self, query: &str, token: &AccessToken) -> SearchResult<ItemSearchResponse> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), token.value.clone()));

        if self.rejected_tokens.lock().unwrap().contains(&token.value) {
            return Err(SearchError::Auth("item search responded with 401".to_string()));
        }

        Ok(ItemSearchResponse {
            total: self.items.as_ref().map(|items| items.len() as u64),
            item_summaries: self.items.clone(),
        })
    }
}

/// Reads like a memory store, refuses every write.
#[derive(Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub async fn seeded(namespace: Namespace, value: &str) -> Self {
        let store = Self::default();
        store.inner.put(namespace, value.to_string()).await.unwrap();
        store
    }
}

impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, namespace: Namespace) -> Result<Option<String>, StoreError> {
        self.inner.get(namespace).await
    }

    async fn put(&self, _namespace: Namespace, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk full".to_string()))
    }
}
