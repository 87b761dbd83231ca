//! Line classification: company prefix, hardware and action keywords

use crate::config::Vocabulary;
use crate::error::NotesError;
use crate::types::ClassifiedLine;
use regex::Regex;

/// Decides whether a note line describes an attachment worth parsing
///
/// Company patterns are compiled once; matching is literal and
/// case-insensitive, anchored at the start of the line.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    companies: Vec<(Regex, String)>,
    hardware: Vec<String>,
    actions: Vec<String>,
}

impl LineClassifier {
    /// Compile a classifier from the vocabulary
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, NotesError> {
        let companies = vocabulary
            .companies
            .iter()
            .map(|entry| {
                let pattern = format!("(?i)^{}", regex::escape(&entry.pattern));
                Ok((Regex::new(&pattern)?, entry.label.clone()))
            })
            .collect::<Result<Vec<_>, NotesError>>()?;

        Ok(Self {
            companies,
            hardware: lowercase_all(&vocabulary.hardware),
            actions: lowercase_all(&vocabulary.actions),
        })
    }

    /// Match the leading company and return its label with the rest of the line
    pub fn match_company<'a>(&'a self, line: &'a str) -> Option<ClassifiedLine<'a>> {
        self.companies.iter().find_map(|(pattern, label)| {
            pattern.find(line).map(|m| ClassifiedLine {
                company: label.as_str(),
                remainder: &line[m.end()..],
            })
        })
    }

    /// Classify a note line
    ///
    /// Returns `None` when the line names no known company, or when the text
    /// after the company lacks a hardware keyword or an action keyword.
    pub fn classify<'a>(&'a self, line: &'a str) -> Option<ClassifiedLine<'a>> {
        let classified = self.match_company(line)?;
        let rest = classified.remainder.to_lowercase();

        if !self.hardware.iter().any(|kw| rest.contains(kw.as_str())) {
            return None;
        }
        if !self.actions.iter().any(|kw| rest.contains(kw.as_str())) {
            return None;
        }
        Some(classified)
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
