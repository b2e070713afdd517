//! Degrees of separation between actors who co-starred in movies.
//!
//! Actors are graph states and movies are edge labels; two actors are
//! adjacent when they share a movie. [`search::find_shortest_path`] runs a
//! breadth-first search over that implicit graph.

pub mod data;
pub mod error;
pub mod frontier;
pub mod lookup;
pub mod neighbors;
pub mod node;
pub mod report;
pub mod search;

pub use data::Database;
pub use error::{FrontierError, LoadError};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use neighbors::{Memberships, Neighbors};
pub use search::{find_shortest_path, search_with, Path, SearchConfig, SearchReport};
