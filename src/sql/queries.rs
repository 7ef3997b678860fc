//! Literal parameterized statements for movies, actors and tokens.

pub const GET_MOVIES: &str =
    "SELECT id, title, description, genre, year, trailer, poster FROM movie ORDER BY title";
pub const GET_ACTORS: &str = "SELECT id, full_name, birth_date, movie_id FROM actor ORDER BY full_name";
pub const GET_MOVIE_IDS: &str = "SELECT id FROM movie";
pub const GET_MOVIE_BY_TITLE: &str =
    "SELECT id, title, description, genre, year, trailer, poster FROM movie WHERE title = $1";
pub const INSERT_MOVIE: &str = "INSERT INTO movie (id, title, description, genre, year, trailer, poster) \
     VALUES ($1, $2, $3, $4, $5, $6, $7)";
pub const DELETE_MOVIE: &str = "DELETE FROM movie WHERE id = $1";
pub const CHECK_TOKEN: &str = "SELECT count(*) FROM token WHERE value = $1";
pub const CHECK_MOVIE: &str = "SELECT count(*) FROM movie WHERE id = $1";
pub const INSERT_TOKEN: &str =
    "INSERT INTO token (id, value) VALUES ($1, $2) ON CONFLICT (value) DO NOTHING";
