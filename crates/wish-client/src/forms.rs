//! Form Input
//!
//! Raw field values as read from the page, validated locally before any
//! request is made.

use crate::domain::{Category, LoginRequest, NewWish, RegisterRequest};
use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// All four fields present and passwords equal. The display name
    /// starts out as the username.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let fields = [&self.username, &self.email, &self.password, &self.confirm_password];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            display_name: self.username.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Composer contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl WishDraft {
    /// Title and content present; wishes are always posted public
    pub fn validate(&self) -> Result<NewWish, ValidationError> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(ValidationError::MissingWishFields);
        }
        Ok(NewWish {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category,
            is_public: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_register_requires_every_field() {
        for blank in 0..4 {
            let mut form = register_form("pw", "pw");
            match blank {
                0 => form.username.clear(),
                1 => form.email.clear(),
                2 => form.password.clear(),
                _ => form.confirm_password.clear(),
            }
            assert_eq!(form.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_register_password_mismatch() {
        assert_eq!(register_form("pw1", "pw2").validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_register_uses_username_as_display_name() {
        let request = register_form("pw", "pw").validate().unwrap();
        assert_eq!(request.display_name, "alice");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm { username: "alice".to_string(), password: String::new() };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_wish_draft_is_public() {
        let draft = WishDraft { title: "Trip".to_string(), content: "Japan".to_string(), category: Category::Travel };
        let wish = draft.validate().unwrap();
        assert!(wish.is_public);
        assert_eq!(wish.category, Category::Travel);

        let empty = WishDraft { content: String::new(), ..draft };
        assert_eq!(empty.validate(), Err(ValidationError::MissingWishFields));
    }
}
