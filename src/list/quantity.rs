use crate::list::ListError;

/// Quantity substituted when edited text does not parse.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Parse quantity text typed by the user.
///
/// Surrounding whitespace is ignored. Zero is rejected since a list entry
/// always stands for at least one unit.
pub fn parse_quantity(text: &str) -> Result<u32, ListError> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(ListError::ZeroQuantity),
        Ok(quantity) => Ok(quantity),
        Err(_) => Err(ListError::InvalidQuantity {
            text: trimmed.to_string(),
        }),
    }
}

/// Parse quantity text, falling back to [`DEFAULT_QUANTITY`] on any failure.
pub fn parse_quantity_or_default(text: &str) -> u32 {
    parse_quantity(text).unwrap_or(DEFAULT_QUANTITY)
}
