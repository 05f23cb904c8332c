//! Input checks done before anything reaches the catalog.

use thiserror::Error;

use crate::catalog::{NewSneaker, SearchFilters};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("enter a search query or pick a brand or year")]
    EmptySearch,
}

/// Brand, model and main color must be filled in.
pub fn check_new_sneaker(new: &NewSneaker) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if new.brand.trim().is_empty() {
        missing.push("brand");
    }
    if new.model.trim().is_empty() {
        missing.push("model");
    }
    if new.main_color.trim().is_empty() {
        missing.push("main color");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

pub fn check_search(query: &str, filters: &SearchFilters) -> Result<(), ValidationError> {
    if query.trim().is_empty() && filters.is_empty() {
        return Err(ValidationError::EmptySearch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Year;

    #[test]
    fn reports_every_missing_field() {
        let new = NewSneaker {
            brand: "Nike".into(),
            model: "  ".into(),
            ..Default::default()
        };
        assert_eq!(
            check_new_sneaker(&new),
            Err(ValidationError::MissingFields(vec!["model", "main color"]))
        );
    }

    #[test]
    fn complete_form_passes() {
        let new = NewSneaker {
            brand: "Puma".into(),
            model: "Suede".into(),
            main_color: "Blue".into(),
            ..Default::default()
        };
        assert!(check_new_sneaker(&new).is_ok());
    }

    #[test]
    fn search_needs_query_or_filter() {
        assert_eq!(
            check_search(" ", &SearchFilters::none()),
            Err(ValidationError::EmptySearch)
        );
        assert_eq!(
            check_search("", &SearchFilters::none().with_brand("all")),
            Err(ValidationError::EmptySearch)
        );
        assert_eq!(
            check_search("", &SearchFilters::none().with_brand("")),
            Err(ValidationError::EmptySearch)
        );
        assert!(check_search("", &SearchFilters::none().with_year(Year::Number(1985))).is_ok());
        assert!(check_search("dunk", &SearchFilters::none()).is_ok());
    }
}
