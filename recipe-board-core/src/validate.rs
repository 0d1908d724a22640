use std::num::IntErrorKind;

use crate::error::FieldError;
use crate::types::{RecipeDraft, RecipeInput};

/// Longest title accepted, counted in characters rather than bytes.
pub const MAX_TITLE_CHARS: usize = 200;

/// Validate raw recipe input, collecting every problem instead of stopping at
/// the first one.
///
/// Title errors come before minutes errors so the messages read in form order.
pub fn validate(input: &RecipeInput) -> Result<RecipeDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = trim_form_text(&input.title);
    if title.is_empty() {
        errors.push(FieldError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(FieldError::TitleTooLong);
    }

    let minutes = match parse_minutes(&input.minutes) {
        Ok(minutes) => Some(minutes),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let description = normalize_description(&input.description);

    match minutes {
        Some(minutes) if errors.is_empty() => {
            Ok(RecipeDraft::new(title.to_string(), minutes, description))
        }
        _ => Err(errors),
    }
}

/// Parse the minutes field. Leading/trailing whitespace is ignored, an ASCII
/// sign is allowed, and full-width digits count as digits.
pub fn parse_minutes(raw: &str) -> Result<i32, FieldError> {
    let raw = trim_form_text(raw);
    if raw.is_empty() {
        return Err(FieldError::MinutesRequired);
    }

    let normalized: String = raw.chars().map(fold_full_width_digit).collect();

    let minutes = normalized.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => FieldError::MinutesTooLarge,
        IntErrorKind::NegOverflow => FieldError::MinutesTooSmall,
        _ => FieldError::MinutesNotInteger,
    })?;

    if minutes < 1 {
        return Err(FieldError::MinutesTooSmall);
    }

    Ok(minutes)
}

/// Trim a description; blank becomes `None` so it is stored as NULL.
pub fn normalize_description(raw: &str) -> Option<String> {
    let trimmed = trim_form_text(raw);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strip surrounding whitespace, including the ASCII information separators
/// U+001C..=U+001F, which `str::trim` keeps.
pub fn trim_form_text(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

fn fold_full_width_digit(c: char) -> char {
    match c {
        '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
        _ => c,
    }
}
