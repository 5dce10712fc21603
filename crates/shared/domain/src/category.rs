use serde::{Deserialize, Serialize};
use std::fmt;

/// Land-use category inferred from a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Residential,
    Commercial,
    Industrial,
    Institutional,
}

impl Category {
    pub const ALL: [Self; 4] =
        [Self::Residential, Self::Commercial, Self::Industrial, Self::Institutional];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Institutional => "institutional",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category tally. Every category is always present, zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationBreakdown {
    pub residential: usize,
    pub commercial: usize,
    pub industrial: usize,
    pub institutional: usize,
}

impl ClassificationBreakdown {
    pub fn record(&mut self, category: Category) {
        *self.slot(category) += 1;
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Residential => self.residential,
            Category::Commercial => self.commercial,
            Category::Industrial => self.industrial,
            Category::Institutional => self.institutional,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.residential + self.commercial + self.industrial + self.institutional
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Residential => &mut self.residential,
            Category::Commercial => &mut self.commercial,
            Category::Industrial => &mut self.industrial,
            Category::Institutional => &mut self.institutional,
        }
    }
}

impl FromIterator<Category> for ClassificationBreakdown {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut breakdown = Self::default();
        for category in iter {
            breakdown.record(category);
        }
        breakdown
    }
}
