use crate::models::TodoItemInput;

pub const TITLE_MIN_LENGTH: usize = 3;
pub const TITLE_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 256;
pub const COMPLETION_MAX: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    Required,
    Optional,
}

pub fn validate_new(input: &TodoItemInput) -> Result<(), Vec<String>> {
    validate(input, TitleRule::Required)
}

/// Rules for `PATCH /todos/{id}`; absent fields are not checked.
pub fn validate_patch(input: &TodoItemInput) -> Result<(), Vec<String>> {
    validate(input, TitleRule::Optional)
}

pub fn validate(input: &TodoItemInput, title_rule: TitleRule) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match input.title.as_deref() {
        None if title_rule == TitleRule::Required => {
            errors.push("The Title field is required".to_string());
        }
        None => {}
        Some(title) => {
            let length = title.chars().count();
            if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
                errors.push(format!(
                    "The Title's length must range between {TITLE_MIN_LENGTH} and {TITLE_MAX_LENGTH} characters"
                ));
            }
        }
    }

    if let Some(description) = input.description.as_deref() {
        if description.chars().count() > DESCRIPTION_MAX_LENGTH {
            errors.push(format!(
                "The Description's length must not exceed {DESCRIPTION_MAX_LENGTH} characters"
            ));
        }
    }

    if let Some(completion_percentage) = input.completion_percentage {
        if completion_percentage > COMPLETION_MAX {
            errors.push(format!(
                "The Completion Percentage must range between 0 and {COMPLETION_MAX}"
            ));
        }
    }

    if let Some(expire_at) = input.expire_at {
        if expire_at < input.created_at {
            errors.push("The Expiration Date cannot precede the Creation Date".to_string());
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
