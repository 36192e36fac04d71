use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Hex color code, short or long form
    /// - Valid: "#fff", "#1A2b3C"
    /// - Invalid: "fff", "#ffff", "#gggggg", "# fff"
    pub static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();

    /// A single token without any whitespace (size abbreviations like "XL")
    pub static ref NO_WHITESPACE_REGEX: Regex = Regex::new(r"^\S+$").unwrap();
}

/// Error codes attached to field rules; [`RequestValidator`] maps them to messages
pub mod codes {
    pub const REQUIRED: &str = "required";
    pub const HEX_COLOR: &str = "hex_color";
    pub const NO_WHITESPACE: &str = "no_whitespace";
    pub const URL: &str = "url";
    pub const POSITIVE: &str = "positive";
    pub const DECIMAL_PLACES: &str = "decimal_places";
    pub const MAX_AMOUNT: &str = "max_amount";
    pub const NOT_EMPTY: &str = "not_empty";
    pub const LENGTH: &str = "length";
}

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(codes::REQUIRED));
    }
    Ok(())
}

/// Prices are stored as NUMERIC(12, 2): at most two decimal places, below 10^10
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// A price must be positive and fit the price column without rounding
pub fn valid_price(value: &Decimal) -> std::result::Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new(codes::POSITIVE));
    }
    if value.normalize().scale() > 2 {
        return Err(ValidationError::new(codes::DECIMAL_PLACES));
    }
    if *value >= MAX_PRICE {
        return Err(ValidationError::new(codes::MAX_AMOUNT));
    }
    Ok(())
}

/// Language of the field messages returned on validation failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationLocale {
    #[default]
    En,
    PtBr,
}

impl ValidationLocale {
    pub fn parse(value: &str) -> std::result::Result<Self, String> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(ValidationLocale::En),
            "pt" | "pt-br" => Ok(ValidationLocale::PtBr),
            other => Err(format!(
                "VALIDATION_LOCALE must be 'en' or 'pt-BR', got '{}'",
                other
            )),
        }
    }
}

/// Runs the declarative field rules of a request payload and turns the first
/// violation into a single field-specific message.
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    locale: ValidationLocale,
}

impl RequestValidator {
    pub fn new(locale: ValidationLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> ValidationLocale {
        self.locale
    }

    pub fn validate<T: Validate>(&self, payload: &T) -> Result<()> {
        match payload.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let message = first_violation(&errors, None)
                    .map(|(field, error)| self.message(&field, &error))
                    .unwrap_or_else(|| self.fallback_message());
                Err(AppError::Validation(message))
            }
        }
    }

    fn message(&self, field: &str, error: &ValidationError) -> String {
        let min = error.params.get("min").map(|v| v.to_string());
        let max = error.params.get("max").map(|v| v.to_string());

        match (self.locale, error.code.as_ref()) {
            (ValidationLocale::En, codes::REQUIRED) => format!("{} is required", field),
            (ValidationLocale::PtBr, codes::REQUIRED) => format!("{} é obrigatório", field),

            (ValidationLocale::En, codes::LENGTH) => match (min, max) {
                (Some(min), _) if error.params.get("value").is_some_and(is_shorter(&min)) => {
                    format!("{} must be at least {} characters", field, min)
                }
                (_, Some(max)) => format!("{} must be at most {} characters", field, max),
                _ => format!("{} has an invalid length", field),
            },
            (ValidationLocale::PtBr, codes::LENGTH) => match (min, max) {
                (Some(min), _) if error.params.get("value").is_some_and(is_shorter(&min)) => {
                    format!("{} deve ter no mínimo {} caracteres", field, min)
                }
                (_, Some(max)) => format!("{} deve ter no máximo {} caracteres", field, max),
                _ => format!("{} tem um tamanho inválido", field),
            },

            (ValidationLocale::En, codes::HEX_COLOR) => {
                format!("{} must be a valid hex code", field)
            }
            (ValidationLocale::PtBr, codes::HEX_COLOR) => {
                format!("{} deve ser um código hexadecimal válido", field)
            }

            (ValidationLocale::En, codes::NO_WHITESPACE) => {
                format!("{} must not contain whitespace", field)
            }
            (ValidationLocale::PtBr, codes::NO_WHITESPACE) => {
                format!("{} não pode conter espaços", field)
            }

            (ValidationLocale::En, codes::URL) => format!("{} must be a valid URL", field),
            (ValidationLocale::PtBr, codes::URL) => format!("{} deve ser uma URL válida", field),

            (ValidationLocale::En, codes::POSITIVE) => {
                format!("{} must be greater than zero", field)
            }
            (ValidationLocale::PtBr, codes::POSITIVE) => {
                format!("{} deve ser maior que zero", field)
            }

            (ValidationLocale::En, codes::DECIMAL_PLACES) => {
                format!("{} must have at most 2 decimal places", field)
            }
            (ValidationLocale::PtBr, codes::DECIMAL_PLACES) => {
                format!("{} deve ter no máximo 2 casas decimais", field)
            }

            (ValidationLocale::En, codes::MAX_AMOUNT) => {
                format!("{} must be less than {}", field, MAX_PRICE)
            }
            (ValidationLocale::PtBr, codes::MAX_AMOUNT) => {
                format!("{} deve ser menor que {}", field, MAX_PRICE)
            }

            (ValidationLocale::En, codes::NOT_EMPTY) => {
                format!("{} must contain at least one item", field)
            }
            (ValidationLocale::PtBr, codes::NOT_EMPTY) => {
                format!("{} deve conter ao menos um item", field)
            }

            (ValidationLocale::En, _) => format!("{} is invalid", field),
            (ValidationLocale::PtBr, _) => format!("{} é inválido", field),
        }
    }

    fn fallback_message(&self) -> String {
        match self.locale {
            ValidationLocale::En => "Invalid request body".to_string(),
            ValidationLocale::PtBr => "Corpo da requisição inválido".to_string(),
        }
    }
}

/// `value` is the string the length rule rejected; it is shorter than `min`
/// when the rule failed on its lower bound.
fn is_shorter(min: &str) -> impl Fn(&serde_json::Value) -> bool + '_ {
    move |value| {
        let min: usize = min.parse().unwrap_or(0);
        match value {
            serde_json::Value::String(s) => s.chars().count() < min,
            serde_json::Value::Array(items) => items.len() < min,
            _ => false,
        }
    }
}

/// A missing value is reported before any format rule on the same field
fn rule_rank(code: &str) -> u8 {
    match code {
        codes::REQUIRED => 0,
        codes::NOT_EMPTY => 1,
        _ => 2,
    }
}

/// Depth-first search for the first field error, visiting fields in name order
/// so the reported violation is deterministic.
fn first_violation(
    errors: &ValidationErrors,
    prefix: Option<&str>,
) -> Option<(String, ValidationError)> {
    let mut fields: Vec<(&Cow<'static, str>, &ValidationErrorsKind)> =
        errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (name, kind) in fields {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name.to_string(),
        };

        let found = match kind {
            ValidationErrorsKind::Field(list) => list
                .iter()
                .min_by_key(|e| rule_rank(&e.code))
                .map(|e| (path, e.clone())),
            ValidationErrorsKind::Struct(inner) => first_violation(inner, Some(&path)),
            ValidationErrorsKind::List(items) => items.iter().find_map(|(index, inner)| {
                first_violation(inner, Some(&format!("{}[{}]", path, index)))
            }),
        };

        if found.is_some() {
            return found;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, Validate)]
    struct Link {
        #[validate(url(code = "url"))]
        url: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(
            custom(function = "crate::shared::validation::not_blank"),
            length(max = 5, code = "length")
        )]
        name: String,
        #[validate(regex(path = *HEX_COLOR_REGEX, code = "hex_color"))]
        value: String,
        #[validate(length(min = 1, code = "not_empty"), nested)]
        links: Vec<Link>,
    }

    fn payload(name: &str, value: &str, links: &[&str]) -> Payload {
        Payload {
            name: name.to_string(),
            value: value.to_string(),
            links: links
                .iter()
                .map(|u| Link { url: u.to_string() })
                .collect(),
        }
    }

    fn message_of(result: Result<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_hex_color_regex() {
        assert!(HEX_COLOR_REGEX.is_match("#fff"));
        assert!(HEX_COLOR_REGEX.is_match("#1A2b3C"));
        assert!(!HEX_COLOR_REGEX.is_match("fff"));
        assert!(!HEX_COLOR_REGEX.is_match("#ffff"));
        assert!(!HEX_COLOR_REGEX.is_match("#gggggg"));
        assert!(!HEX_COLOR_REGEX.is_match("# fff"));
    }

    #[test]
    fn test_no_whitespace_regex() {
        assert!(NO_WHITESPACE_REGEX.is_match("XL"));
        assert!(!NO_WHITESPACE_REGEX.is_match("X L"));
        assert!(!NO_WHITESPACE_REGEX.is_match(" S"));
        assert!(!NO_WHITESPACE_REGEX.is_match(""));
    }

    #[test]
    fn test_not_blank_and_valid_price() {
        assert!(not_blank("  ").is_err());
        assert!(not_blank("Shoes").is_ok());
        assert!(valid_price(&Decimal::ZERO).is_err());
        assert!(valid_price(&Decimal::new(1999, 2)).is_ok());
    }

    #[test]
    fn test_price_must_fit_two_decimal_places() {
        let code = |d: Decimal| valid_price(&d).unwrap_err().code;

        assert_eq!(code(Decimal::new(19999, 3)), codes::DECIMAL_PLACES);
        assert_eq!(code(Decimal::new(1, 3)), codes::DECIMAL_PLACES);
        // Trailing zeros do not count
        assert!(valid_price(&Decimal::new(19990, 3)).is_ok());
    }

    #[test]
    fn test_price_must_stay_below_ten_billion() {
        assert_eq!(MAX_PRICE, Decimal::new(10_000_000_000, 0));
        assert!(valid_price(&Decimal::new(999_999_999_999, 2)).is_ok());
        assert_eq!(
            valid_price(&MAX_PRICE).unwrap_err().code,
            codes::MAX_AMOUNT
        );
        assert_eq!(
            valid_price(&Decimal::new(9_999_999_999_999_999, 2))
                .unwrap_err()
                .code,
            codes::MAX_AMOUNT
        );
    }

    #[test]
    fn test_valid_payload_passes() {
        let validator = RequestValidator::default();
        assert!(validator
            .validate(&payload("Red", "#ff0000", &["https://cdn.example/a.png"]))
            .is_ok());
    }

    #[test]
    fn test_blank_name_is_required() {
        let validator = RequestValidator::default();
        let msg = message_of(validator.validate(&payload(
            "   ",
            "#ff0000",
            &["https://cdn.example/a.png"],
        )));
        assert_eq!(msg, "name is required");
    }

    #[test]
    fn test_too_long_name_reports_max() {
        let validator = RequestValidator::default();
        let msg = message_of(validator.validate(&payload(
            "Crimson",
            "#ff0000",
            &["https://cdn.example/a.png"],
        )));
        assert_eq!(msg, "name must be at most 5 characters");
    }

    #[test]
    fn test_first_violation_is_deterministic() {
        let validator = RequestValidator::default();
        // links, name and value are all invalid; fields are visited by name
        let msg = message_of(validator.validate(&payload("", "red", &[])));
        assert_eq!(msg, "links must contain at least one item");
    }

    #[test]
    fn test_nested_list_errors_carry_index() {
        let validator = RequestValidator::default();
        let msg = message_of(validator.validate(&payload(
            "Red",
            "#ff0000",
            &["https://cdn.example/a.png", "not a url"],
        )));
        assert_eq!(msg, "links[1].url must be a valid URL");
    }

    #[test]
    fn test_pt_br_messages() {
        let validator = RequestValidator::new(ValidationLocale::PtBr);
        let msg = message_of(validator.validate(&payload(
            "Red",
            "vermelho",
            &["https://cdn.example/a.png"],
        )));
        assert_eq!(msg, "value deve ser um código hexadecimal válido");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(ValidationLocale::parse("pt_BR").unwrap(), ValidationLocale::PtBr);
        assert_eq!(ValidationLocale::parse("EN").unwrap(), ValidationLocale::En);
        assert!(ValidationLocale::parse("de").is_err());
    }
}
