//! The closed set of cookbook recipes offered in the menu

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CookbookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Recipe {
    #[default]
    Description,
    DataframeFormatting,
    SideBySideCharts,
    SelectRows,
    RangeSlider,
    AdvancedSelectbox,
    Seaborn,
    Wordcloud,
    Emojis,
}

impl Recipe {
    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::DataframeFormatting => "Dataframe formatting",
            Self::SideBySideCharts => "Side-by-side charts",
            Self::SelectRows => "Select rows",
            Self::RangeSlider => "Range slider",
            Self::AdvancedSelectbox => "Advanced selectbox",
            Self::Seaborn => "Seaborn",
            Self::Wordcloud => "Wordcloud",
            Self::Emojis => "Emojis",
        }
    }

    /// Every recipe, in menu order
    pub fn all() -> &'static [Recipe] {
        &[
            Recipe::Description,
            Recipe::DataframeFormatting,
            Recipe::SideBySideCharts,
            Recipe::SelectRows,
            Recipe::RangeSlider,
            Recipe::AdvancedSelectbox,
            Recipe::Seaborn,
            Recipe::Wordcloud,
            Recipe::Emojis,
        ]
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Recipe {
    type Err = CookbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.label() == s)
            .ok_or_else(|| CookbookError::UnknownRecipe(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for recipe in Recipe::all() {
            assert_eq!(recipe.label().parse::<Recipe>().unwrap(), *recipe);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Plotly".parse::<Recipe>().unwrap_err();
        assert!(matches!(err, CookbookError::UnknownRecipe(s) if s == "Plotly"));
    }

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = Recipe::all().iter().map(Recipe::label).collect();
        assert_eq!(
            labels,
            vec![
                "Description",
                "Dataframe formatting",
                "Side-by-side charts",
                "Select rows",
                "Range slider",
                "Advanced selectbox",
                "Seaborn",
                "Wordcloud",
                "Emojis",
            ]
        );
    }
}
