use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

//Response wrappers
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub status: String,
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: i64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            status: "success".to_string(),
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RequestQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,

    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
}

impl RequestQueryDto {
    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(1) as u32
    }

    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(10) as u32
    }

    pub fn offset(&self) -> i64 {
        ((self.page_or_default() - 1) * self.limit_or_default()) as i64
    }
}

// Basic phone number validation - supports international formats
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone_regex =
        regex::Regex::new(r"^(\+?[0-9]{1,3}[- ]?)?[0-9]{3}[- ]?[0-9]{3}[- ]?[0-9]{4}$")
            .map_err(|_| ValidationError::new("invalid_phone_regex"))?;

    if !phone_regex.is_match(phone) {
        let mut error = ValidationError::new("invalid_phone");
        error.message = Some(Cow::from(
            "Phone number must be in a valid format (e.g., +1234567890 or 123-456-7890)",
        ));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let query = RequestQueryDto {
            page: None,
            limit: None,
        };
        assert_eq!(query.page_or_default(), 1);
        assert_eq!(query.limit_or_default(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_pagination_offset() {
        let query = RequestQueryDto {
            page: Some(3),
            limit: Some(20),
        };
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+1234567890").is_ok());
        assert!(validate_phone("123-456-7890").is_ok());
        assert!(validate_phone("not a phone").is_err());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let response: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 21, 1, 10);
        assert_eq!(response.total_pages, 3);
    }
}
