//! Input validation for notes and users
//!
//! Validation runs at the point of persistence: handlers hand the request
//! body straight to these functions and forward any failure unchanged.
//! Username uniqueness is left to the store's unique constraint.

use regex::Regex;
use std::sync::OnceLock;

use crate::{
    error::{ApiError, ApiResult},
    models::{NewNote, NewUserRequest, NoteDraft, UpdateNote},
};

/// Minimum number of characters in a username
pub const USERNAME_MIN_LENGTH: usize = 4;

/// Minimum number of characters in a password
pub const PASSWORD_MIN_LENGTH: usize = 3;

/// Importance of a note created without an explicit flag
pub const DEFAULT_IMPORTANT: bool = false;

/// A registration request that passed validation
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }

    if username.chars().count() < USERNAME_MIN_LENGTH {
        return Err(format!(
            "Username must be at least {} characters long",
            USERNAME_MIN_LENGTH
        ));
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

    if !regex.is_match(username) {
        return Err("Username can only contain letters, numbers, and underscores".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LENGTH
        ));
    }

    Ok(())
}

/// Validate note content; only an absent or empty value is rejected
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Path `content` is required.".to_string());
    }

    Ok(())
}

/// Validate a note creation payload, defaulting `important` to [`DEFAULT_IMPORTANT`]
pub fn validate_note(payload: NewNote) -> ApiResult<NoteDraft> {
    let content = payload.content.unwrap_or_default();
    validate_content(&content).map_err(|msg| note_error("content", msg))?;

    Ok(NoteDraft {
        content,
        important: payload.important.unwrap_or(DEFAULT_IMPORTANT),
    })
}

/// Validate a note update; only the fields that are present are checked
pub fn validate_note_update(payload: UpdateNote) -> ApiResult<UpdateNote> {
    if let Some(content) = &payload.content {
        validate_content(content).map_err(|msg| note_error("content", msg))?;
    }

    Ok(payload)
}

/// Validate a registration request
pub fn validate_new_user(payload: NewUserRequest) -> ApiResult<Registration> {
    let username = payload.username.unwrap_or_default();
    validate_username(&username).map_err(|msg| user_error("username", msg))?;

    let password = payload.password.unwrap_or_default();
    validate_password(&password).map_err(|msg| user_error("password", msg))?;

    Ok(Registration {
        username,
        name: payload.name,
        password,
    })
}

fn note_error(field: &str, msg: String) -> ApiError {
    ApiError::Validation(format!("Note validation failed: {}: {}", field, msg))
}

fn user_error(field: &str, msg: String) -> ApiError {
    ApiError::Validation(format!("User validation failed: {}: {}", field, msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_short_usernames_are_rejected() {
        for username in ["a", "no", "abc"] {
            let err = validate_username(username).unwrap_err();
            assert!(err.contains("at least 4"), "{username}: {err}");
        }
        assert!(validate_username("abcd").is_ok());
    }

    #[test]
    fn test_username_character_set() {
        assert!(validate_username("root_user_42").is_ok());

        for username in ["aaaaaaahhhhhhhh.", "with space", "dash-ed", "ünïcode", "semi;colon"] {
            let err = validate_username(username).unwrap_err();
            assert!(err.contains("letters, numbers, and underscores"), "{username}: {err}");
        }
    }

    #[test]
    fn test_username_length_counts_characters() {
        // four characters, eight bytes
        let err = validate_username("éééé").unwrap_err();
        assert!(err.contains("letters, numbers, and underscores"));

        let err = validate_username("éé").unwrap_err();
        assert!(err.contains("at least 4"));
    }

    #[test]
    fn test_important_defaults_to_false() {
        let draft = validate_note(NewNote {
            content: Some("HTML is easy".to_string()),
            important: None,
        })
        .unwrap();

        assert_eq!(draft.content, "HTML is easy");
        assert!(!draft.important);
    }

    #[test]
    fn test_note_content_is_required() {
        for content in [None, Some(String::new())] {
            let err = validate_note(NewNote {
                content,
                important: Some(true),
            })
            .unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(
                err.to_string(),
                "Note validation failed: content: Path `content` is required."
            );
        }
    }

    #[test]
    fn test_whitespace_content_is_kept() {
        let draft = validate_note(NewNote {
            content: Some("   ".to_string()),
            important: None,
        })
        .unwrap();

        assert_eq!(draft.content, "   ");
    }

    #[test]
    fn test_partial_update_passes_through() {
        let update = UpdateNote {
            content: None,
            important: Some(true),
        };
        assert_eq!(validate_note_update(update.clone()).unwrap(), update);

        let err = validate_note_update(UpdateNote {
            content: Some(String::new()),
            important: None,
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_registration_requires_password() {
        let err = validate_new_user(NewUserRequest {
            username: Some("mluukkai".to_string()),
            name: Some("Matti Luukkainen".to_string()),
            password: Some("ab".to_string()),
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("User validation failed: password"));

        let registration = validate_new_user(NewUserRequest {
            username: Some("mluukkai".to_string()),
            name: None,
            password: Some("salainen".to_string()),
        })
        .unwrap();
        assert_eq!(registration.username, "mluukkai");
        assert_eq!(registration.password, "salainen");
    }
}
