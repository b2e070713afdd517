use std::fmt::Write;

use crate::data::Database;
use crate::search::Path;

/// Human-readable account of a path starting at `source`: a headline with
/// the degrees of separation, then one line per shared movie.
pub fn render(db: &Database, source: &str, path: &Path) -> String {
    let mut out = format!("{} degrees of separation.\n", path.len());
    let mut previous = source;
    for (i, (movie, person)) in path.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(db, previous),
            person_name(db, person),
            db.movie(movie).map_or(movie.as_str(), |m| m.title.as_str()),
        );
        previous = person.as_str();
    }
    out
}

fn person_name<'a>(db: &'a Database, id: &'a str) -> &'a str {
    db.person(id).map_or(id, |p| p.name.as_str())
}
