use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

pub fn prompt(prompt: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?)
}

/// Like [prompt], but asks again until `validate` accepts the input.
pub fn prompt_validated<E: ToString>(
    prompt: &str,
    default: Option<String>,
    validate: impl Fn(&str) -> Result<(), E>,
) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .validate_with(|value: &String| validate(value));
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}
