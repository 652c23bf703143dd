//! Generic access to the content sources.
//!
//! Every source exposes the same set of endpoints (home, detail, episode, server) under its own
//! path prefix and with its own response shapes. The traits in this module describe a source,
//! the fetchers on [`StreamHub`] are generic over them.

use crate::common::Request;
use crate::error::{Error, ErrorContext};
use crate::internal::sealed::Sealed;
use crate::media::{Anime, Drama, Film, Manga, Source};
use crate::parse::normalize_server_id;
use crate::player::ResolveTicket;
use crate::{options, Result, StreamHub};
use serde::de::DeserializeOwned;
use serde::Deserialize;

impl Sealed for Anime {}
impl Sealed for Drama {}
impl Sealed for Film {}
impl Sealed for Manga {}

/// A content source which has a home page.
pub trait Catalog: Sealed {
    const SOURCE: Source;

    type Home: Request + DeserializeOwned + Default + Send;

    fn home_path() -> String {
        format!("/{}/home", Self::SOURCE)
    }
}

/// A content source which has detail pages for its titles.
pub trait DetailCatalog: Catalog {
    type Detail: Request + DeserializeOwned + Send;

    fn detail_path(id: &str) -> String {
        format!("/{}/anime/{}", Self::SOURCE, urlencoding::encode(id))
    }
}

/// A content source which has episode pages.
pub trait EpisodeCatalog: Catalog {
    /// How an episode is identified. Anime episodes only need their own id, drama episodes are
    /// identified by the drama and the episode id.
    type EpisodeId: ?Sized + Sync;
    type Episode: Request + DeserializeOwned + Send;

    fn episode_path(id: &Self::EpisodeId) -> String;
}

/// A content source whose episodes are streamed via servers which must be resolved to a stream
/// url first.
pub trait ServerCatalog: EpisodeCatalog {
    fn server_path(server_id: &str) -> String {
        format!("/{}/server/{}", Self::SOURCE, urlencoding::encode(server_id))
    }

    /// Additional parameters sent along when resolving the server of `ticket`.
    fn server_options(_ticket: &ResolveTicket) -> ServerOptions {
        ServerOptions::default()
    }
}

options! {
    ServerOptions;
    /// The href of the server as listed in the episode. Some sources need it to find the server.
    server_href(String, "serverHref") = None
}

impl ServerOptions {
    fn into_query(self, server_id: &str) -> Vec<(String, String)> {
        if self.server_href.is_some() {
            self.to_query(&[("serverId".to_string(), server_id.to_string())])
        } else {
            vec![]
        }
    }
}

#[derive(Debug, Default, Deserialize, Request)]
#[serde(default)]
struct ServerUrl {
    url: String,
}

impl StreamHub {
    /// Requests the home page of source `C`.
    pub async fn try_home<C: Catalog>(&self) -> Result<C::Home> {
        self.executor.get(C::home_path()).request().await
    }

    /// Requests the home page of source `C`. On any error the error is logged and an empty home
    /// page returned instead.
    pub async fn home<C: Catalog>(&self) -> C::Home {
        match self.try_home::<C>().await {
            Ok(home) => home,
            Err(err) => {
                tracing::error!(source = %C::SOURCE, operation = "home", error = %err, "request failed");
                C::Home::default()
            }
        }
    }

    /// Requests the detail page of the title with id `id`.
    pub async fn try_detail<C: DetailCatalog>(&self, id: impl AsRef<str>) -> Result<C::Detail> {
        let id = non_empty(id.as_ref(), "id")?;
        self.executor.get(C::detail_path(id)).request().await
    }

    /// Like [`StreamHub::try_detail`] but logs the error and returns [`None`] on failure.
    pub async fn detail<C: DetailCatalog>(&self, id: impl AsRef<str>) -> Option<C::Detail> {
        match self.try_detail::<C>(id).await {
            Ok(detail) => Some(detail),
            Err(err) => {
                tracing::error!(source = %C::SOURCE, operation = "detail", error = %err, "request failed");
                None
            }
        }
    }

    /// Requests an episode page, including the streaming servers of the episode.
    pub async fn try_episode<C: EpisodeCatalog>(&self, id: &C::EpisodeId) -> Result<C::Episode> {
        self.executor.get(C::episode_path(id)).request().await
    }

    /// Like [`StreamHub::try_episode`] but logs the error and returns [`None`] on failure.
    pub async fn episode<C: EpisodeCatalog>(&self, id: &C::EpisodeId) -> Option<C::Episode> {
        match self.try_episode::<C>(id).await {
            Ok(episode) => Some(episode),
            Err(err) => {
                tracing::error!(source = %C::SOURCE, operation = "episode", error = %err, "request failed");
                None
            }
        }
    }

    /// Resolve a streaming server to the url which can be embedded into a player. `server_id`
    /// may also be a server path (`/otakudesu/server/<id>`), see
    /// [`crate::parse::normalize_server_id`].
    pub async fn resolve_server<C: ServerCatalog>(
        &self,
        server_id: impl AsRef<str>,
        options: ServerOptions,
    ) -> Result<String> {
        let server_id = normalize_server_id(non_empty(server_id.as_ref(), "server id")?);
        let path = C::server_path(&server_id);

        let resolved: ServerUrl = self
            .executor
            .get(&path)
            .query(&options.into_query(&server_id))
            .request()
            .await?;
        if resolved.url.is_empty() {
            return Err(Error::Envelope(
                ErrorContext::new("response has no stream url").with_url(path),
            ));
        }
        Ok(resolved.url)
    }
}

fn non_empty<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(Error::Input(ErrorContext::new(format!("{name} is empty"))))
    } else {
        Ok(value)
    }
}
