//! Quotes Data

/// New Quote Request Data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewQuote {
    pub email: String,
    pub whatsapp: String,
    pub description: String,
}

impl NewQuote {
    /// Whether every field carries something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.email, &self.whatsapp, &self.description]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> NewQuote {
        NewQuote {
            email: "ana@example.com".to_string(),
            whatsapp: "+55 11 99999-0000".to_string(),
            description: "Landing page".to_string(),
        }
    }

    #[test]
    fn complete_quote_is_accepted() {
        assert!(quote().is_complete());
    }

    #[test]
    fn blank_fields_make_the_quote_incomplete() {
        assert!(
            !NewQuote {
                whatsapp: "   ".to_string(),
                ..quote()
            }
            .is_complete()
        );
        assert!(!NewQuote::default().is_complete());
    }
}
