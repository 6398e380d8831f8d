use std::fmt;

/// User-agent category a block is scoped to.
///
/// Blocks without a `name:` prefix belong to [`Category::None`]. Any prefix
/// outside the fixed set becomes a [`Category::Custom`] bucket that no
/// user-agent fact ever selects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    All,
    Bot,
    Googlebot,
    Desktop,
    Mobile,
    Tablet,
    Ie,
    Ff,
    None,
    Custom(String),
}

impl Category {
    /// The categories whose buckets always exist, possibly empty.
    pub const FIXED: [Category; 9] = [
        Category::All,
        Category::Bot,
        Category::Googlebot,
        Category::Desktop,
        Category::Mobile,
        Category::Tablet,
        Category::Ie,
        Category::Ff,
        Category::None,
    ];

    /// Map a block prefix (without the trailing `:`) to its category.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "all" => Category::All,
            "bot" => Category::Bot,
            "googlebot" => Category::Googlebot,
            "desktop" => Category::Desktop,
            "mobile" => Category::Mobile,
            "tablet" => Category::Tablet,
            "ie" => Category::Ie,
            "ff" => Category::Ff,
            "none" => Category::None,
            other => Category::Custom(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::All => "all",
            Category::Bot => "bot",
            Category::Googlebot => "googlebot",
            Category::Desktop => "desktop",
            Category::Mobile => "mobile",
            Category::Tablet => "tablet",
            Category::Ie => "ie",
            Category::Ff => "ff",
            Category::None => "none",
            Category::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_names_round_trip() {
        for category in Category::FIXED {
            assert_eq!(Category::from_name(category.as_str()), category);
        }
    }

    #[test]
    fn unknown_prefix_is_custom() {
        assert_eq!(
            Category::from_name("staging 2"),
            Category::Custom("staging 2".into())
        );
        assert_eq!(Category::from_name("staging 2").to_string(), "staging 2");
    }
}
