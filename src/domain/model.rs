use serde::{Deserialize, Serialize};

/// A named, described, image-bearing leaf entry: a city, a beach or a temple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl Place {
    pub fn new(name: &str, description: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub cities: Vec<Place>,
}

/// The whole travel-recommendation document.
///
/// Missing top-level categories deserialize as empty; anything else that does not fit
/// the shape fails the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub beaches: Vec<Place>,
    #[serde(default)]
    pub temples: Vec<Place>,
}

/// Top-level grouping, in the order matches are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Countries,
    Beaches,
    Temples,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Countries, Category::Beaches, Category::Temples];

    pub fn key(self) -> &'static str {
        match self {
            Category::Countries => "countries",
            Category::Beaches => "beaches",
            Category::Temples => "temples",
        }
    }
}

impl Dataset {
    pub fn from_slice(bytes: &[u8]) -> crate::utils::error::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Searchable places of one category; countries are flattened to their cities.
    pub fn places(&self, category: Category) -> Box<dyn Iterator<Item = &Place> + '_> {
        match category {
            Category::Countries => Box::new(self.countries.iter().flat_map(|c| c.cities.iter())),
            Category::Beaches => Box::new(self.beaches.iter()),
            Category::Temples => Box::new(self.temples.iter()),
        }
    }

    pub fn place_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.places(*c).count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.place_count() == 0
    }
}
