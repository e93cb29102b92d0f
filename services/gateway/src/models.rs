use serde::{Deserialize, Serialize};
use types::errors::FieldError;
use types::trade::Trade;
use types::user::{User, UserId};
use types::validate::{check, Validate};

pub const DEFAULT_TRADES_LIMIT: i64 = 5;
pub const DEFAULT_TRADES_OFFSET: i64 = 0;

/// Status value echoed in the body of successful mutations
pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct UserPath {
    pub user_id: UserId,
}

impl Validate for UserPath {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TradesQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_offset")]
    pub offset: i64,
}

impl Default for TradesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TRADES_LIMIT,
            offset: DEFAULT_TRADES_OFFSET,
        }
    }
}

// No range checks: out-of-range values are clamped by the store.
impl Validate for TradesQuery {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }
}

fn default_limit() -> i64 {
    DEFAULT_TRADES_LIMIT
}

fn default_offset() -> i64 {
    DEFAULT_TRADES_OFFSET
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameQuery {
    pub new_name: String,
}

impl Validate for RenameQuery {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.new_name.is_empty() {
            errors.push(FieldError::min_length("new_name", 1));
        }
        check(errors)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameUserResponse {
    pub status: u16,
    pub user: User,
}

impl RenameUserResponse {
    pub fn ok(user: User) -> Self {
        Self {
            status: STATUS_OK,
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TradesResponse {
    pub status: u16,
    pub data: Vec<Trade>,
}

impl TradesResponse {
    pub fn ok(data: Vec<Trade>) -> Self {
        Self {
            status: STATUS_OK,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trades_query_defaults() {
        let query: TradesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 5);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_empty_new_name_rejected() {
        let query = RenameQuery {
            new_name: String::new(),
        };
        let errors = query.validate().unwrap_err();
        assert_eq!(errors[0].kind, "value_error.any_str.min_length");
    }

    #[test]
    fn test_rename_response_shape() {
        let body = RenameUserResponse::ok(User::new(2, "investor", "Bob"));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["status"], 200);
        assert_eq!(value["user"]["name"], "Bob");
        assert_eq!(value["user"]["degree"], serde_json::json!([]));
    }
}
