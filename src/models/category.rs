/// Category selection for the filter bar. `All` is the sentinel that keeps
/// every card visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "Semua",
            Self::Category(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_matches_everything() {
        assert!(CategoryFilter::All.matches("electronics"));
        assert!(CategoryFilter::All.matches("jewelery"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn category_matches_exactly() {
        let filter = CategoryFilter::Category("electronics".to_string());
        assert!(filter.matches("electronics"));
        assert!(!filter.matches("jewelery"));
        assert!(!filter.matches("electronic"));
    }
}
