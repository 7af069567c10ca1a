//! Credit card model
//!
//! A card is built once from a [`CardDraft`] and never edited afterwards,
//! except for its default flag, which only the card repository may change.

use std::fmt;

use super::card_number::{normalize, strip_whitespace, GROUP_SIZE};
use super::card_type::CardType;
use super::ids::CardId;
use super::secret::SecretText;

/// Fields of the add-card form, before validation
#[derive(Clone, Default)]
pub struct CardDraft {
    pub name: String,
    /// Card number as typed; spacing is ignored
    pub number: String,
    /// MM/YY
    pub expiry: String,
    pub cvv: String,
    pub cardholder_name: String,
    pub card_type: CardType,
    pub is_default: bool,
}

impl CardDraft {
    /// Whether every required field has content. Drives the submit control.
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.number,
            &self.expiry,
            &self.cvv,
            &self.cardholder_name,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

impl fmt::Debug for CardDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDraft")
            .field("name", &self.name)
            .field("number_len", &self.number.len())
            .field("expiry", &self.expiry)
            .field("cardholder_name", &self.cardholder_name)
            .field("card_type", &self.card_type)
            .field("is_default", &self.is_default)
            .finish_non_exhaustive()
    }
}

/// A stored credit card
#[derive(Debug, Clone)]
pub struct CreditCard {
    id: CardId,
    name: String,
    number: SecretText,
    masked_number: String,
    expiry: String,
    cvv: SecretText,
    card_type: CardType,
    is_default: bool,
    cardholder_name: String,
}

impl CreditCard {
    /// Build a card from form input. The number is whitespace-stripped and its
    /// masked form derived here; nothing is validated until the card is added
    /// to a repository.
    pub fn new(draft: CardDraft) -> Self {
        let number = strip_whitespace(&draft.number);
        let masked_number = normalize(&number).masked;
        Self {
            id: CardId::new(),
            name: draft.name.trim().to_string(),
            number: SecretText::new(number),
            masked_number,
            expiry: draft.expiry.trim().to_string(),
            cvv: SecretText::new(draft.cvv.trim()),
            card_type: draft.card_type,
            is_default: draft.is_default,
            cardholder_name: draft.cardholder_name.trim().to_string(),
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// Display name, e.g. "Groceries"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full digits, whitespace removed
    pub fn number(&self) -> &SecretText {
        &self.number
    }

    /// Full number in groups of four, for an explicit reveal
    pub fn grouped_number(&self) -> String {
        normalize(self.number.expose()).grouped
    }

    /// `•••• •••• •••• 1234`
    pub fn masked_number(&self) -> &str {
        &self.masked_number
    }

    pub fn last_four(&self) -> &str {
        let digits = self.number.expose();
        let start = digits
            .char_indices()
            .rev()
            .nth(GROUP_SIZE - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &digits[start..]
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvv(&self) -> &SecretText {
        &self.cvv
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn cardholder_name(&self) -> &str {
        &self.cardholder_name
    }

    pub(crate) fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    /// Validate the card
    pub fn validate(&self) -> Result<(), CardValidationError> {
        let required = [
            ("Card name", self.name.is_empty()),
            ("Card number", self.number.is_empty()),
            ("Expiry date", self.expiry.is_empty()),
            ("CVV", self.cvv.is_empty()),
            ("Cardholder name", self.cardholder_name.is_empty()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, empty)| *empty) {
            return Err(CardValidationError::MissingField(*field));
        }

        let digits = self.number.expose();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CardValidationError::NonDigitNumber);
        }
        if digits.len() < GROUP_SIZE {
            return Err(CardValidationError::NumberTooShort(digits.len()));
        }

        if !is_valid_expiry(&self.expiry) {
            return Err(CardValidationError::InvalidExpiry(self.expiry.clone()));
        }

        let cvv = self.cvv.expose();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CardValidationError::InvalidCvv);
        }

        Ok(())
    }
}

/// MM/YY with a month from 01 to 12
fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let two_digits = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_digit());
    if !two_digits(month) || !two_digits(year) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

impl fmt::Display for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.card_type, self.masked_number)
    }
}

/// Validation errors for credit cards
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Card number must contain only digits")]
    NonDigitNumber,
    #[error("Card number must have at least 4 digits, got {0}")]
    NumberTooShort(usize),
    #[error("Expiry date must be MM/YY, got '{0}'")]
    InvalidExpiry(String),
    #[error("CVV must be 3 or 4 digits")]
    InvalidCvv,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CardDraft {
        CardDraft {
            name: "Groceries".into(),
            number: "4111 1111 1111 1234".into(),
            expiry: "12/25".into(),
            cvv: "123".into(),
            cardholder_name: "John Doe".into(),
            card_type: CardType::Visa,
            is_default: true,
        }
    }

    #[test]
    fn test_new_card_derives_display_forms() {
        let card = CreditCard::new(draft());
        assert_eq!(card.number().expose(), "4111111111111234");
        assert_eq!(card.grouped_number(), "4111 1111 1111 1234");
        assert_eq!(card.masked_number(), "•••• •••• •••• 1234");
        assert_eq!(card.last_four(), "1234");
        assert!(card.is_default());
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_draft_completeness() {
        assert!(draft().is_complete());

        let mut missing = draft();
        missing.cvv = " ".into();
        assert!(!missing.is_complete());
        assert!(!CardDraft::default().is_complete());
    }

    #[test]
    fn test_validation_reports_first_missing_field() {
        let mut d = draft();
        d.expiry.clear();
        d.cardholder_name.clear();
        assert_eq!(
            CreditCard::new(d).validate(),
            Err(CardValidationError::MissingField("Expiry date"))
        );
    }

    #[test]
    fn test_validation_rejects_bad_numbers() {
        let mut d = draft();
        d.number = "41a1".into();
        assert_eq!(
            CreditCard::new(d).validate(),
            Err(CardValidationError::NonDigitNumber)
        );

        let mut d = draft();
        d.number = "12".into();
        assert_eq!(
            CreditCard::new(d).validate(),
            Err(CardValidationError::NumberTooShort(2))
        );
    }

    #[test]
    fn test_validation_checks_expiry_shape() {
        for bad in ["1225", "13/25", "00/25", "1/25", "12/2025", "ab/cd"] {
            let mut d = draft();
            d.expiry = bad.into();
            assert_eq!(
                CreditCard::new(d).validate(),
                Err(CardValidationError::InvalidExpiry(bad.to_string())),
                "expiry {bad}"
            );
        }

        let mut d = draft();
        d.expiry = " 01/30 ".into();
        assert!(CreditCard::new(d).validate().is_ok());
    }

    #[test]
    fn test_validation_checks_cvv_shape() {
        for bad in ["12", "12345", "12a"] {
            let mut d = draft();
            d.cvv = bad.into();
            assert_eq!(CreditCard::new(d).validate(), Err(CardValidationError::InvalidCvv));
        }

        let mut d = draft();
        d.cvv = "1234".into();
        assert!(CreditCard::new(d).validate().is_ok());
    }

    #[test]
    fn test_debug_hides_sensitive_fields() {
        let debug = format!("{:?}", CreditCard::new(draft()));
        assert!(!debug.contains("4111111111111234"));
        assert!(!debug.contains("\"123\""));
    }

    #[test]
    fn test_display_uses_masked_number() {
        let card = CreditCard::new(draft());
        assert_eq!(card.to_string(), "Groceries (Visa •••• •••• •••• 1234)");
    }
}
