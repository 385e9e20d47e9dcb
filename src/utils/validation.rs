use crate::utils::error::{InventoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(InventoryError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

/// Parses a user-supplied quantity. Only whole, non-negative numbers pass.
pub fn parse_quantity(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    trimmed.parse::<u64>().map_err(|e| {
        InventoryError::invalid_input("quantity", raw, format!("expected a whole number: {}", e))
    })
}

/// Item names are free text but must contain something besides whitespace.
pub fn validate_item_name(item: &str) -> Result<()> {
    if item.trim().is_empty() {
        return Err(InventoryError::invalid_input(
            "item",
            item,
            "item name cannot be blank",
        ));
    }
    Ok(())
}
