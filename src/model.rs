//! Catalogue records and the two request schemas for writing movies.
//!
//! Creation and update are deliberately different shapes: a new movie must name
//! every attribute exactly once, while an update may name any non-empty subset.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const TITLE_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const FULL_NAME_MAX_CHARS: usize = 30;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
    pub trailer: String,
    pub poster: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Actor {
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: String,
    pub movie_id: Uuid,
}

/// Writable movie attributes. Doubles as the column whitelist for partial updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovieField {
    Title,
    Description,
    Genre,
    Year,
    Poster,
    Trailer,
}

impl MovieField {
    pub const ALL: [MovieField; 6] = [
        MovieField::Title,
        MovieField::Description,
        MovieField::Genre,
        MovieField::Year,
        MovieField::Poster,
        MovieField::Trailer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Description => "description",
            MovieField::Genre => "genre",
            MovieField::Year => "year",
            MovieField::Poster => "poster",
            MovieField::Trailer => "trailer",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

/// A value bound for one column of a partial update.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i32),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
    pub poster: String,
    pub trailer: String,
}

impl NewMovie {
    /// Key set must equal the full attribute set; missing and extra keys are both rejected.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let map = into_object(body)?;
        let exact = map.len() == MovieField::ALL.len()
            && MovieField::ALL.iter().all(|f| map.contains_key(f.as_str()));
        if !exact {
            let names: Vec<&str> = MovieField::ALL.iter().map(|f| f.as_str()).collect();
            return Err(AppError::BadRequest(format!("keys {} are required", names.join(", "))));
        }
        let movie: NewMovie = serde_json::from_value(Value::Object(map))
            .map_err(|e| AppError::BadRequest(format!("invalid movie: {}", e)))?;
        check_title(&movie.title)?;
        check_description(&movie.description)?;
        Ok(movie)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub poster: Option<String>,
    pub trailer: Option<String>,
}

impl MovieChanges {
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let map = into_object(body)?;
        if let Some(unknown) = map.keys().find(|k| MovieField::from_key(k).is_none()) {
            return Err(AppError::BadRequest(format!("key {} is not defined for instance", unknown)));
        }
        if map.is_empty() {
            return Err(AppError::BadRequest("no attributes to update".into()));
        }
        let changes: MovieChanges = serde_json::from_value(Value::Object(map))
            .map_err(|e| AppError::BadRequest(format!("invalid movie attributes: {}", e)))?;
        if changes.fields().is_empty() {
            return Err(AppError::BadRequest("no attributes to update".into()));
        }
        if let Some(title) = &changes.title {
            check_title(title)?;
        }
        if let Some(description) = &changes.description {
            check_description(description)?;
        }
        Ok(changes)
    }

    /// Supplied attributes in column order.
    pub fn fields(&self) -> Vec<(MovieField, FieldValue)> {
        let mut out = Vec::new();
        for field in MovieField::ALL {
            let value = match field {
                MovieField::Title => self.title.clone().map(FieldValue::Text),
                MovieField::Description => self.description.clone().map(FieldValue::Text),
                MovieField::Genre => self.genre.clone().map(FieldValue::Text),
                MovieField::Year => self.year.map(FieldValue::Int),
                MovieField::Poster => self.poster.clone().map(FieldValue::Text),
                MovieField::Trailer => self.trailer.clone().map(FieldValue::Text),
            };
            if let Some(v) = value {
                out.push((field, v));
            }
        }
        out
    }

    pub fn apply(&self, movie: &mut Movie) {
        for (field, value) in self.fields() {
            match (field, value) {
                (MovieField::Title, FieldValue::Text(s)) => movie.title = s,
                (MovieField::Description, FieldValue::Text(s)) => movie.description = s,
                (MovieField::Genre, FieldValue::Text(s)) => movie.genre = s,
                (MovieField::Year, FieldValue::Int(n)) => movie.year = n,
                (MovieField::Poster, FieldValue::Text(s)) => movie.poster = s,
                (MovieField::Trailer, FieldValue::Text(s)) => movie.trailer = s,
                _ => {}
            }
        }
    }
}

fn into_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn check_title(title: &str) -> Result<(), AppError> {
    check_len("title", title, TITLE_MAX_CHARS)
}

fn check_description(description: &str) -> Result<(), AppError> {
    check_len("description", description, DESCRIPTION_MAX_CHARS)
}

fn check_len(name: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!("{} must be at most {} characters", name, max)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "title": "X",
            "description": "d",
            "genre": "g",
            "year": 2020,
            "poster": "p",
            "trailer": "t"
        })
    }

    #[test]
    fn new_movie_accepts_exact_key_set() {
        let movie = NewMovie::from_json(full_body()).unwrap();
        assert_eq!(movie.title, "X");
        assert_eq!(movie.year, 2020);
    }

    #[test]
    fn new_movie_rejects_missing_and_extra_keys() {
        let mut missing = full_body();
        missing.as_object_mut().unwrap().remove("trailer");
        let err = NewMovie::from_json(missing).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m.starts_with("keys ")));

        let mut extra = full_body();
        extra.as_object_mut().unwrap().insert("rating".into(), json!(5));
        assert!(matches!(NewMovie::from_json(extra), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn new_movie_enforces_lengths_in_chars() {
        let mut body = full_body();
        body["title"] = json!("ф".repeat(50));
        assert!(NewMovie::from_json(body.clone()).is_ok());
        body["title"] = json!("ф".repeat(51));
        assert!(NewMovie::from_json(body).is_err());
    }

    #[test]
    fn changes_accept_subset_in_column_order() {
        let changes = MovieChanges::from_json(json!({"year": 2021, "genre": "drama"})).unwrap();
        assert_eq!(
            changes.fields(),
            vec![
                (MovieField::Genre, FieldValue::Text("drama".into())),
                (MovieField::Year, FieldValue::Int(2021)),
            ]
        );
    }

    #[test]
    fn changes_reject_unknown_key_and_empty_body() {
        match MovieChanges::from_json(json!({"rating": 9})) {
            Err(AppError::BadRequest(m)) => assert_eq!(m, "key rating is not defined for instance"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(MovieChanges::from_json(json!({})).is_err());
        assert!(MovieChanges::from_json(json!({"year": null})).is_err());
    }
}
