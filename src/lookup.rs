use std::io::{self, BufRead, Write};

use crate::data::Database;

/// Turns a typed name into a person id. When several people share the name,
/// lists them on `output` and reads the intended id from `input`.
///
/// `Ok(None)` means nobody matched, or the chosen id was not one of the
/// listed candidates.
pub fn resolve<R, W>(db: &Database, name: &str, input: &mut R, output: &mut W) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    let candidates = db.person_ids_for_name(name);
    match candidates.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(only.to_string())),
        _ => {
            writeln!(output, "Which '{name}'?")?;
            for id in &candidates {
                if let Some(person) = db.person(id) {
                    writeln!(output, "ID: {id}, Name: {}, Birth: {}", person.name, person.birth)?;
                }
            }
            write!(output, "Intended Person ID: ")?;
            output.flush()?;

            let mut choice = String::new();
            input.read_line(&mut choice)?;
            let choice = choice.trim();
            Ok(candidates.iter().find(|id| **id == choice).map(|id| id.to_string()))
        }
    }
}
