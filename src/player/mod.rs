//! Server and quality selection of episode players.
//!
//! Episodes are streamed by several servers in several qualities. The [`LookupTable`] lists all
//! combinations, the [`ServerQualityResolver`] turns a selection into a stream url and caches
//! every resolved url for as long as the episode view lives. [`PlayerSession`] drives the
//! resolver and resolves servers through a [`ServerResolve`] backend, usually a
//! [`ServerResolver`] obtained via `EpisodeDetail::player` or `DramaEpisodeDetail::player`.

mod cache;
mod lookup;
mod resolver;
mod session;

pub use cache::*;
pub use lookup::*;
pub use resolver::*;
pub use session::*;
