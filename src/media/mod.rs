//! Content of all sources: anime, drama, film and manga.
//!
//! Every content domain is represented by an uninhabited marker type ([`Anime`], [`Drama`],
//! [`Film`], [`Manga`]) which is passed as type parameter to the generic fetchers of
//! [`crate::StreamHub`].

mod anime;
mod drama;
mod film;
mod manga;
mod shared;

pub use anime::*;
pub use drama::*;
pub use film::*;
pub use manga::*;
pub use shared::*;
