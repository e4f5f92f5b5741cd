use serde::{Deserialize, Serialize};

/// Campaign categories offered by the creation form and the browse dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arts,
    Music,
    Health,
    Finance,
    Education,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Arts,
        Category::Music,
        Category::Health,
        Category::Finance,
        Category::Education,
    ];

    /// The literal string stored on-chain in the `category` event argument.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Arts => "arts",
            Category::Music => "music",
            Category::Health => "health",
            Category::Finance => "finance",
            Category::Education => "education",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Arts => "Arts",
            Category::Music => "Music",
            Category::Health => "Health",
            Category::Finance => "Finance",
            Category::Education => "Education",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// What the user picked in the category dropdown.
///
/// Strings that are neither `"all"` nor a known category are kept verbatim so
/// they can still be used as a filter value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelector {
    #[default]
    All,
    Known(Category),
    Other(String),
}

impl CategorySelector {
    pub const ALL_VALUE: &'static str = "all";

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => Self::ALL_VALUE,
            CategorySelector::Known(category) => category.as_str(),
            CategorySelector::Other(raw) => raw,
        }
    }

    /// Filter value for the category argument, `None` for an unconstrained query.
    pub fn filter_value(&self) -> Option<&str> {
        match self {
            CategorySelector::All => None,
            other => Some(other.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelector::All)
    }
}

impl From<&str> for CategorySelector {
    fn from(raw: &str) -> Self {
        if raw == Self::ALL_VALUE {
            return CategorySelector::All;
        }
        match raw.parse::<Category>() {
            Ok(category) => CategorySelector::Known(category),
            Err(_) => CategorySelector::Other(raw.to_string()),
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        CategorySelector::Known(category)
    }
}

impl std::fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One option of the category dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Dropdown options, `"all"` first.
pub fn category_options() -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        value: CategorySelector::ALL_VALUE,
        label: "All",
    })
    .chain(Category::ALL.into_iter().map(|c| CategoryOption {
        value: c.as_str(),
        label: c.label(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_from_str() {
        assert_eq!(CategorySelector::from("all"), CategorySelector::All);
        assert_eq!(
            CategorySelector::from("music"),
            CategorySelector::Known(Category::Music)
        );
        assert_eq!(
            CategorySelector::from("gardening"),
            CategorySelector::Other("gardening".to_string())
        );
    }

    #[test]
    fn selector_matching_is_exact() {
        // On-chain values are compared byte for byte, so "Music" is not "music".
        assert_eq!(
            CategorySelector::from("Music"),
            CategorySelector::Other("Music".to_string())
        );
        assert_eq!(
            CategorySelector::from("ALL"),
            CategorySelector::Other("ALL".to_string())
        );
    }

    #[test]
    fn filter_value_only_for_constrained_selectors() {
        assert_eq!(CategorySelector::All.filter_value(), None);
        assert_eq!(
            CategorySelector::Known(Category::Arts).filter_value(),
            Some("arts")
        );
        assert_eq!(
            CategorySelector::Other("space".into()).filter_value(),
            Some("space")
        );
    }

    #[test]
    fn options_list_all_first() {
        let options = category_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[5].value, "education");
        assert_eq!(options[5].label, "Education");
    }
}
