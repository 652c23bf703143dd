//! # streamhub-rs
//!
//! A pure Rust client for the StreamHub content api, an aggregator serving anime (`otakudesu`),
//! drama (`dramaid`), film (`aquaaquaria`) and manga (`komiku`) listings.
//!
//! Everything starts with a [`StreamHub`] instance:
//!
//! ```no_run
//! use streamhub::media::{Anime, Manga};
//! use streamhub::StreamHub;
//!
//! # #[tokio::main]
//! # async fn main() -> streamhub::Result<()> {
//! let streamhub = StreamHub::builder()
//!     .api_base("https://api.example.com")
//!     .api_secret("secret")
//!     .build();
//!
//! let home = streamhub.home::<Anime>().await.page();
//! let manga = streamhub.try_home::<Manga>().await?;
//!
//! let episode = streamhub.try_episode::<Anime>("frieren-episode-1").await?;
//! let mut player = episode.player();
//! player.select_server("Server A");
//! let effects = player.select_quality("720p").await;
//! # Ok(())
//! # }
//! ```
//!
//! Besides fetching content, the library contains the ui independent logic of the site: the
//! server / quality selection of episode players ([`player`]), the hero carousel ([`hero`]) and
//! the manga reader progress ([`reader`]). They never touch a ui themselves but return what has
//! to be changed.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod common;
pub mod config;
pub mod environment;
pub mod error;
pub mod hero;
pub mod media;
pub mod parse;
pub mod player;
pub mod reader;
pub mod streamhub;

// internal
mod internal;
mod macros;

// internal
pub(crate) use common::Request;
pub(crate) use macros::{enum_values, options};
pub(crate) use streamhub::Executor;

pub use error::Result;
pub use streamhub::{StreamHub, StreamHubBuilder};
