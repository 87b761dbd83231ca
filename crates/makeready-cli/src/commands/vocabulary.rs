//! Vocabulary command implementation.

use crate::cli::VocabularyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use makeready_notes::Vocabulary;

/// Execute the vocabulary command.
pub fn execute_vocabulary(args: VocabularyArgs, config: &Config) -> Result<()> {
    let vocabulary = config.vocabulary(args.vocabulary.as_deref())?;
    println!("{}", render(&vocabulary)?);
    Ok(())
}

/// Validate and render a vocabulary as TOML.
fn render(vocabulary: &Vocabulary) -> Result<String> {
    vocabulary.validate().map_err(CliError::Config)?;
    vocabulary.to_toml().map_err(CliError::Config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let rendered = render(&Vocabulary::default()).unwrap();
        assert!(rendered.contains("distinguished_company = \"LOOP INTERNET HOLDCO LLC\""));
        assert_eq!(Vocabulary::from_toml(&rendered).unwrap(), Vocabulary::default());
    }

    #[test]
    fn test_render_rejects_invalid() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.anchor.clear();
        assert!(matches!(render(&vocabulary), Err(CliError::Config(_))));
    }
}
