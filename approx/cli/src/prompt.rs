use dialoguer::Input;

/// Use `value` if given; otherwise ask for it on the terminal.
pub fn number_or_prompt(value: Option<f64>, prompt: &str) -> dialoguer::Result<f64> {
    match value {
        Some(value) => Ok(value),
        None => Input::<f64>::new().with_prompt(prompt).interact_text(),
    }
}
