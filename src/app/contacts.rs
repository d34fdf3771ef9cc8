// src/app/contacts.rs
use std::io;
use std::path::Path;

const FIRST_NAMES: [&str; 8] = ["Ada", "Bruno", "Chiara", "Dmitri", "Elena", "Farid", "Grace", "Hugo"];
const LAST_NAMES: [&str; 6] = ["Rossi", "Novak", "Okafor", "Lindqvist", "Moreau", "Tanaka"];
const COMPANIES: [&str; 5] = ["Viva Foods", "Northwind", "Acme Logistics", "Blue Harbor", "Quanta Labs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub company: String,
    pub email: String,
}

impl Contact {
    /// Parses `name,company,email`; missing fields stay empty.
    pub fn parse_line(line: &str) -> Self {
        let mut fields = line.splitn(3, ',').map(str::trim);
        Self {
            name: fields.next().unwrap_or_default().to_string(),
            company: fields.next().unwrap_or_default().to_string(),
            email: fields.next().unwrap_or_default().to_string(),
        }
    }
}

/// Deterministic sample contacts.
pub fn generate(count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let company = COMPANIES[i % COMPANIES.len()];
            Contact {
                name: format!("{} {}", first, last),
                company: company.to_string(),
                email: format!(
                    "{}.{}{}@{}.example",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i,
                    company.to_lowercase().replace(' ', "")
                ),
            }
        })
        .collect()
}

/// One contact per non-blank line.
pub fn load(path: &Path) -> io::Result<Vec<Contact>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Contact::parse_line)
        .collect())
}
