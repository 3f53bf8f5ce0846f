//! Explicit validator functions invoked at the boundary before any domain
//! logic runs.
//!
//! Body validators produce a `field -> message` map ([`AppError::FieldValidation`]);
//! the query-parameter validator produces an ordered message list
//! ([`AppError::ParamValidation`]). Both shapes are part of the response
//! contract and must not be merged.

use std::collections::BTreeMap;

use bookstack_core::types::DbId;
use bookstack_core::{book, identity};
use bookstack_db::models::book::{
    BookChanges, BookFilter, CreateBook, NewBook, RateBooks, UpdateBook,
};
use bookstack_db::models::publisher::Publisher;
use bookstack_db::models::user::{LoginUser, RegisterUser};

use crate::error::AppError;
use crate::query::BookFilterParams;

type FieldErrors = BTreeMap<String, String>;

const MSG_NULL: &str = "cannot be null";
const MSG_EMPTY: &str = "cannot be empty";
const MSG_BAD_YEAR: &str = "it is not a valid year";
const MSG_BAD_YEAR_UPDATE: &str = "it is not a year";
const MSG_BAD_PUBLISHER: &str = "must be any of: 'POLLUB', 'UMCS', 'UP'";
const MSG_SCORE_RANGE: &str = "must be in range 1-5";
const MSG_NOT_NULL: &str = "must not be null";
const MSG_POSITIVE: &str = "must be greater than 0";
const MSG_BAD_EMAIL: &str = "it is not an email";
const MSG_WEAK_PASSWORD: &str = "weak password";
const MSG_YEAR_PARAM: &str = "Invalid year";
const MSG_RATING_PARAM: &str = "Rating must be in range 1-5";
const MSG_BAD_ID: &str = "ID must be integer";

fn fail(errors: FieldErrors) -> AppError {
    AppError::FieldValidation(errors)
}

/// Check a required text field; returns the trimmed-nothing value when present.
fn required_text<'a>(
    errors: &mut FieldErrors,
    field: &str,
    value: &'a Option<String>,
) -> Option<&'a str> {
    match value.as_deref() {
        None => {
            errors.insert(field.into(), MSG_NULL.into());
            None
        }
        Some("") => {
            errors.insert(field.into(), MSG_EMPTY.into());
            None
        }
        Some(text) => Some(text),
    }
}

/// Validate a creation payload and convert it into its persisted form.
pub fn validate_new_book(input: &CreateBook) -> Result<NewBook, AppError> {
    let mut errors = FieldErrors::new();

    let title = required_text(&mut errors, "title", &input.title);
    let author = required_text(&mut errors, "author", &input.author);

    let year = match required_text(&mut errors, "year", &input.year) {
        Some(text) if !book::is_valid_year_text(text) => {
            errors.insert("year".into(), MSG_BAD_YEAR.into());
            None
        }
        other => other,
    };

    let publisher = match &input.publisher {
        None => {
            errors.insert("publisher".into(), MSG_NULL.into());
            None
        }
        Some(name) => match name.parse::<Publisher>() {
            Ok(publisher) => Some(publisher),
            Err(()) => {
                errors.insert("publisher".into(), MSG_BAD_PUBLISHER.into());
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(fail(errors));
    }

    // All four are present once the error map is empty.
    Ok(NewBook {
        title: title.unwrap_or_default().to_string(),
        publication_year: year
            .unwrap_or_default()
            .parse()
            .expect("year validated as 4-digit"),
        author: author.unwrap_or_default().to_string(),
        publisher: publisher.expect("publisher validated"),
    })
}

/// Validate a partial-update payload. Absent fields stay `None`; present
/// fields must be non-empty (title/author) or a valid year.
///
/// The "no data provided" rule is checked by the handler after the target
/// book is known to exist, so an all-`None` result here is not an error.
pub fn validate_book_changes(input: &UpdateBook) -> Result<BookChanges, AppError> {
    let mut errors = FieldErrors::new();

    if let Some(title) = input.title.as_deref() {
        if title.is_empty() {
            errors.insert("title".into(), MSG_EMPTY.into());
        }
    }
    if let Some(author) = input.author.as_deref() {
        if author.is_empty() {
            errors.insert("author".into(), MSG_EMPTY.into());
        }
    }
    if let Some(year) = input.year.as_deref() {
        if !book::is_valid_year_text(year) {
            errors.insert("year".into(), MSG_BAD_YEAR_UPDATE.into());
        }
    }

    if !errors.is_empty() {
        return Err(fail(errors));
    }

    Ok(BookChanges {
        title: input.title.clone(),
        publication_year: input
            .year
            .as_deref()
            .map(|y| y.parse().expect("year validated as 4-digit")),
        author: input.author.clone(),
    })
}

/// Validate a batch rating submission, returning `(book_id, score)` pairs in
/// submission order.
pub fn validate_rating_batch(input: &RateBooks) -> Result<Vec<(DbId, i32)>, AppError> {
    let ratings = match &input.ratings {
        Some(ratings) if !ratings.is_empty() => ratings,
        _ => {
            let mut errors = FieldErrors::new();
            errors.insert("ratings".into(), MSG_EMPTY.into());
            return Err(fail(errors));
        }
    };

    let mut errors = FieldErrors::new();
    let mut pairs = Vec::with_capacity(ratings.len());
    for (i, rating) in ratings.iter().enumerate() {
        let id = match rating.id {
            None => {
                errors.insert(format!("ratings[{i}].id"), MSG_NOT_NULL.into());
                None
            }
            Some(id) if id <= 0 => {
                errors.insert(format!("ratings[{i}].id"), MSG_POSITIVE.into());
                None
            }
            Some(id) => Some(id),
        };
        let score = match rating.score {
            None => {
                errors.insert(format!("ratings[{i}].score"), MSG_NOT_NULL.into());
                None
            }
            Some(score) if !book::is_valid_score(score) => {
                errors.insert(format!("ratings[{i}].score"), MSG_SCORE_RANGE.into());
                None
            }
            Some(score) => Some(score),
        };
        if let (Some(id), Some(score)) = (id, score) {
            pairs.push((id, score));
        }
    }

    if !errors.is_empty() {
        return Err(fail(errors));
    }
    Ok(pairs)
}

/// Validate a registration payload, returning `(email, password)`.
pub fn validate_registration(input: &RegisterUser) -> Result<(String, String), AppError> {
    let mut errors = FieldErrors::new();

    let email = match required_text(&mut errors, "email", &input.email) {
        Some(email) if !identity::is_valid_email(email) => {
            errors.insert("email".into(), MSG_BAD_EMAIL.into());
            None
        }
        other => other,
    };
    let password = match required_text(&mut errors, "password", &input.password) {
        Some(password) if !identity::is_strong_password(password) => {
            errors.insert("password".into(), MSG_WEAK_PASSWORD.into());
            None
        }
        other => other,
    };

    if !errors.is_empty() {
        return Err(fail(errors));
    }
    Ok((
        email.unwrap_or_default().to_string(),
        password.unwrap_or_default().to_string(),
    ))
}

/// Validate a login payload, returning `(email, password)`.
pub fn validate_login(input: &LoginUser) -> Result<(String, String), AppError> {
    let mut errors = FieldErrors::new();
    let email = required_text(&mut errors, "email", &input.email);
    let password = required_text(&mut errors, "password", &input.password);

    if !errors.is_empty() {
        return Err(fail(errors));
    }
    Ok((
        email.unwrap_or_default().to_string(),
        password.unwrap_or_default().to_string(),
    ))
}

/// Validate filter query parameters and convert them into store criteria.
///
/// Violations collect one message per bad parameter, in `year`, `rating`
/// order (the only constrained parameters); filtering never runs when any
/// message exists.
pub fn validate_filter_params(params: &BookFilterParams) -> Result<BookFilter, AppError> {
    let mut messages = Vec::new();

    if let Some(year) = params.year.as_deref() {
        if !book::is_valid_year_text(year) {
            messages.push(MSG_YEAR_PARAM.to_string());
        }
    }
    if let Some(rating) = params.rating.as_deref() {
        if !book::is_valid_rating_text(rating) {
            messages.push(MSG_RATING_PARAM.to_string());
        }
    }

    if !messages.is_empty() {
        return Err(AppError::ParamValidation(messages));
    }

    Ok(BookFilter {
        title: params.title.clone(),
        year: params
            .year
            .as_deref()
            .map(|y| y.parse().expect("year validated as 4-digit")),
        author: params.author.clone(),
        rating: params
            .rating
            .as_deref()
            .map(|r| r.parse().expect("rating validated as single digit")),
    })
}

/// Parse a textual path id. Only unsigned decimal digits are accepted.
pub fn parse_book_id(raw: &str) -> Result<DbId, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request(MSG_BAD_ID));
    }
    raw.parse().map_err(|_| AppError::bad_request(MSG_BAD_ID))
}
