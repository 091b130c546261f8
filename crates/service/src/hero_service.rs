use configs::ApiConfig;
use models::{Hero, HeroId, HeroRef, NewHero};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::fallback::{handle_error, SERVICE_NAME};
use crate::messages::MessageService;

/// Whatever the backend answers to a successful update. `Null` for an empty body.
pub type UpdateAck = serde_json::Value;

struct RawResponse {
    url: String,
    body: Vec<u8>,
}

/// HTTP-backed hero repository.
///
/// Holds no domain state: a pooled `reqwest::Client`, the collection URL and a
/// handle to the shared message log. Every method performs at most one request
/// and always resolves; failures come back as the operation's default.
#[derive(Clone)]
pub struct HeroService {
    client: Client,
    heroes_url: String,
    messages: MessageService,
}

impl HeroService {
    pub fn new(api: &ApiConfig, messages: MessageService) -> Result<Self, ServiceError> {
        let heroes_url = api.heroes_url();
        let client = Client::builder()
            .connect_timeout(api.connect_timeout())
            .timeout(api.request_timeout())
            .build()
            .map_err(|e| ServiceError::transport(&heroes_url, e))?;
        Ok(Self::with_client(client, heroes_url, messages))
    }

    pub fn with_client(client: Client, heroes_url: impl Into<String>, messages: MessageService) -> Self {
        let heroes_url = heroes_url.into().trim_end_matches('/').to_string();
        Self { client, heroes_url, messages }
    }

    pub fn heroes_url(&self) -> &str { &self.heroes_url }

    pub fn messages(&self) -> &MessageService { &self.messages }

    /// GET all heroes.
    #[instrument(skip(self))]
    pub async fn get_heroes(&self) -> Vec<Hero> {
        self.call::<Vec<Hero>>(self.client.get(&self.heroes_url))
            .await
            .inspect(|_| self.log("fetched heroes"))
            .unwrap_or_else(handle_error(&self.messages, "getHeroes", Vec::new()))
    }

    /// GET hero by id. A 404 and a dead backend look the same to the caller.
    #[instrument(skip(self))]
    pub async fn get_hero(&self, id: HeroId) -> Option<Hero> {
        let url = self.item_url(id);
        self.call::<Hero>(self.client.get(&url))
            .await
            .map(|hero| {
                self.log(&format!("fetched hero id={id}"));
                Some(hero)
            })
            .unwrap_or_else(handle_error(&self.messages, format!("getHero id={id}"), None))
    }

    /// POST a new hero; resolves to the record with its server-assigned id.
    #[instrument(skip(self), fields(name = %hero.name))]
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        self.call::<Hero>(self.client.post(&self.heroes_url).json(hero))
            .await
            .map(|hero| {
                self.log(&format!("added hero w/ id={}", hero.id));
                Some(hero)
            })
            .unwrap_or_else(handle_error(&self.messages, "addHero", None))
    }

    /// PUT the full record to the collection resource.
    #[instrument(skip(self), fields(id = hero.id))]
    pub async fn update_hero(&self, hero: &Hero) -> Option<UpdateAck> {
        self.send(self.client.put(&self.heroes_url).json(hero))
            .await
            .and_then(decode_ack)
            .map(|ack| {
                self.log(&format!("updated hero id={}", hero.id));
                Some(ack)
            })
            .unwrap_or_else(handle_error(&self.messages, "updateHero", None))
    }

    /// DELETE by id; accepts a hero or a bare id. Resolves to the removed
    /// record when the backend echoes it, `None` for an empty success body.
    #[instrument(skip(self, hero))]
    pub async fn delete_hero(&self, hero: impl Into<HeroRef>) -> Option<Hero> {
        let id = hero.into().id();
        let url = self.item_url(id);
        self.send(self.client.delete(&url))
            .await
            .and_then(decode_optional::<Hero>)
            .map(|hero| {
                self.log(&format!("deleted hero id={id}"));
                hero
            })
            .unwrap_or_else(handle_error(&self.messages, "deleteHero", None))
    }

    /// GET heroes whose name contains `term`. A blank term answers `[]` without a request.
    ///
    /// # Examples
    /// ```
    /// use service::{HeroService, MessageService};
    /// let svc = HeroService::with_client(reqwest::Client::new(), "http://127.0.0.1:9/api/heroes", MessageService::new());
    /// assert!(tokio_test::block_on(svc.search_heroes("   ")).is_empty());
    /// assert!(svc.messages().is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            debug!(event = "search_skipped", "blank search term");
            return Vec::new();
        }
        let url = format!("{}/", self.heroes_url);
        self.call::<Vec<Hero>>(self.client.get(&url).query(&[("name", term)]))
            .await
            .inspect(|_| self.log(&format!("found heroes matching \"{term}\"")))
            .unwrap_or_else(handle_error(&self.messages, "searchHeroes", Vec::new()))
    }

    fn item_url(&self, id: HeroId) -> String {
        format!("{}/{}", self.heroes_url, id)
    }

    fn log(&self, message: &str) {
        self.messages.add(format!("{SERVICE_NAME}: {message}"));
    }

    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ServiceError> {
        let raw = self.send(request).await?;
        decode(raw)
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse, ServiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| {
                let url = e.url().map(|u| u.to_string()).unwrap_or_else(|| self.heroes_url.clone());
                ServiceError::transport(&url, e)
            })?;
        let url = response.url().to_string();
        let status = response.status();
        debug!(event = "response", %url, status = status.as_u16());
        if !status.is_success() {
            return Err(ServiceError::Status { url, status });
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::transport(&url, e))?
            .to_vec();
        Ok(RawResponse { url, body })
    }
}

fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ServiceError> {
    serde_json::from_slice(&raw.body).map_err(|e| ServiceError::Decode { url: raw.url, message: e.to_string() })
}

/// Empty (or whitespace-only) bodies decode to `None`.
fn decode_optional<T: DeserializeOwned>(raw: RawResponse) -> Result<Option<T>, ServiceError> {
    if raw.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    decode(raw).map(Some)
}

fn decode_ack(raw: RawResponse) -> Result<UpdateAck, ServiceError> {
    Ok(decode_optional(raw)?.unwrap_or(UpdateAck::Null))
}
