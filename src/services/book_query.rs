//! Provider query construction
//!
//! A search arrives either as free text or as structured ISBN/title/author
//! fields. The primary provider understands field prefixes, the fallback
//! provider only gets the raw text.

use serde::Deserialize;

use crate::domain::DomainError;

/// Raw search parameters as received from the HTTP layer
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredQuery {
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookQuery {
    FreeText(String),
    Structured(StructuredQuery),
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl BookQuery {
    pub fn free_text(query: impl Into<String>) -> Result<Self, DomainError> {
        match present(Some(query.into())) {
            Some(q) => Ok(BookQuery::FreeText(q)),
            None => Err(DomainError::Validation(
                "Search query must not be empty".to_string(),
            )),
        }
    }

    pub fn structured(
        isbn: Option<String>,
        title: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        let query = StructuredQuery {
            isbn: present(isbn),
            title: present(title),
            author: present(author),
        };

        if query.isbn.is_none() && query.title.is_none() && query.author.is_none() {
            return Err(DomainError::Validation(
                "At least one of isbn, title or author is required".to_string(),
            ));
        }

        Ok(BookQuery::Structured(query))
    }

    /// Free text wins over structured fields when both are given
    pub fn from_params(params: SearchParams) -> Result<Self, DomainError> {
        if let Some(q) = present(params.q) {
            return Ok(BookQuery::FreeText(q));
        }
        Self::structured(params.isbn, params.title, params.author)
    }

    /// Encoded `q` value for the primary provider (`isbn:..+intitle:..+inauthor:..`)
    pub fn primary_terms(&self) -> String {
        match self {
            BookQuery::FreeText(q) => urlencoding::encode(q).into_owned(),
            BookQuery::Structured(s) => {
                let clauses = [
                    ("isbn:", &s.isbn),
                    ("intitle:", &s.title),
                    ("inauthor:", &s.author),
                ];
                clauses
                    .iter()
                    .filter_map(|(prefix, value)| {
                        value
                            .as_ref()
                            .map(|v| format!("{}{}", prefix, urlencoding::encode(v)))
                    })
                    .collect::<Vec<_>>()
                    .join("+")
            }
        }
    }

    /// Unprefixed text, as sent to the fallback provider
    pub fn raw_text(&self) -> String {
        match self {
            BookQuery::FreeText(q) => q.clone(),
            BookQuery::Structured(s) => [&s.isbn, &s.title, &s.author]
                .into_iter()
                .flatten()
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Encoded `q` value for the fallback provider
    pub fn fallback_terms(&self) -> String {
        urlencoding::encode(&self.raw_text()).into_owned()
    }
}
