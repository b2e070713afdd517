//! Loading people, movies and star credits from a CSV directory.
//!
//! The directory holds `people.csv` (`id,name,birth`), `movies.csv`
//! (`id,title,year`) and `stars.csv` (`person_id,movie_id`), each with a
//! header row.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::neighbors::Memberships;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub birth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Deserialize)]
struct Star {
    person_id: String,
    movie_id: String,
}

/// Everything loaded from one data directory. Immutable once built; searches
/// borrow its [`Memberships`].
#[derive(Debug, Default)]
pub struct Database {
    people: HashMap<String, Person>,
    movies: HashMap<String, Movie>,
    names: HashMap<String, BTreeSet<String>>,
    memberships: Memberships,
}

impl Database {
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let open = |file: &str| {
            let path = dir.join(file);
            File::open(&path).map_err(|source| LoadError::Open { path, source })
        };
        let db = Self::from_readers(open("people.csv")?, open("movies.csv")?, open("stars.csv")?)?;
        info!(
            dir = %dir.display(),
            people = db.people.len(),
            movies = db.movies.len(),
            "data loaded"
        );
        Ok(db)
    }

    pub fn from_readers<P, M, S>(people: P, movies: M, stars: S) -> Result<Self, LoadError>
    where
        P: Read,
        M: Read,
        S: Read,
    {
        let mut db = Self::default();

        for person in rows::<Person, _>(people, "people.csv")? {
            db.memberships.add_entity(&person.id);
            db.names
                .entry(person.name.to_lowercase())
                .or_default()
                .insert(person.id.clone());
            db.people.insert(person.id.clone(), person);
        }

        for movie in rows::<Movie, _>(movies, "movies.csv")? {
            db.memberships.add_group(&movie.id);
            db.movies.insert(movie.id.clone(), movie);
        }

        let mut skipped = 0usize;
        for star in rows::<Star, _>(stars, "stars.csv")? {
            if db.people.contains_key(&star.person_id) && db.movies.contains_key(&star.movie_id) {
                db.memberships.link(&star.person_id, &star.movie_id);
            } else {
                skipped += 1;
                debug!(person = %star.person_id, movie = %star.movie_id, "skipping credit with unknown id");
            }
        }
        if skipped > 0 {
            debug!(skipped, "credits referencing unknown people or movies");
        }

        Ok(db)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Ids of everyone whose name matches case-insensitively, in id order.
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&str> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn memberships(&self) -> &Memberships {
        &self.memberships
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}

fn rows<T, R>(reader: R, file: &str) -> Result<Vec<T>, LoadError>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| LoadError::Csv {
            file: file.to_string(),
            source,
        })
}
