use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("ambiguous {kind} \"{query}\", matches:{}", bullet_list(.candidates))]
    Ambiguous {
        kind: &'static str,
        query: String,
        candidates: Vec<String>,
    },
    #[error("no {kind} matching \"{query}\".{}", suggestion_list(.suggestions))]
    NoMatch {
        kind: &'static str,
        query: String,
        suggestions: Vec<String>,
    },
    #[error(transparent)]
    Storage(#[from] diesel::result::Error),
    #[error(transparent)]
    Connection(#[from] diesel::result::ConnectionError),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn validation<D: std::fmt::Display>(d: D) -> Self {
        Error::Validation(d.to_string())
    }

    pub fn not_found<D: std::fmt::Display>(d: D) -> Self {
        Error::NotFound(d.to_string())
    }
}

fn bullet_list(items: &[String]) -> String {
    items.iter().map(|item| format!("\n  - {item}")).collect()
}

fn suggestion_list(items: &[String]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!("\nDid you mean:{}", bullet_list(items))
    }
}
