//! Builds the partial UPDATE for a movie. Column names come only from [`MovieField`].

use crate::model::{FieldValue, MovieChanges, MovieField};

/// Statement text plus the values to bind, in placeholder order.
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<FieldValue>,
}

fn set_clause(fields: &[MovieField]) -> String {
    fields
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{} = ${}", f.as_str(), i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `UPDATE movie SET a = $1, b = $2 WHERE id = $3`; the id is bound last by the caller.
/// Returns `None` when there is nothing to set.
pub fn update_movie(changes: &MovieChanges) -> Option<QueryBuf> {
    let (fields, params): (Vec<MovieField>, Vec<FieldValue>) = changes.fields().into_iter().unzip();
    if fields.is_empty() {
        return None;
    }
    let id_param = fields.len() + 1;
    Some(QueryBuf {
        sql: format!("UPDATE movie SET {} WHERE id = ${}", set_clause(&fields), id_param),
        params,
    })
}
