//! Country records as decoded from the REST Countries payload.
//!
//! Only the fields the UI shows are modelled. Everything else in the source
//! object is ignored by serde. Optional fields stay `Option` so that formatting
//! can apply an explicit "N/A" per field.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One nation, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    /// Three-letter ISO code, used as the stable record key.
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub currencies: Option<Vec<(String, Currency)>>,
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub languages: Option<Vec<(String, String)>>,
    #[serde(default)]
    pub flags: Flags,
    /// Emoji flag, e.g. "🇫🇷".
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub maps: Maps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Maps {
    #[serde(default, rename = "googleMaps")]
    pub google_maps: Option<String>,
}

impl CountryRecord {
    /// First entry of `continents`, the only one the controller looks at.
    pub fn primary_continent(&self) -> Option<&str> {
        self.continents.first().map(String::as_str)
    }

    /// First listed capital, if any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital
            .as_ref()
            .and_then(|capitals| capitals.first())
            .map(String::as_str)
    }

    /// Subregion, with an empty string treated as absent.
    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref().filter(|s| !s.is_empty())
    }
}

/// Decode a JSON object into `(key, value)` pairs in document order.
///
/// `null` and a missing field both decode to `None`.
fn ordered_pairs<'de, D, T>(deserializer: D) -> Result<Option<Vec<(String, T)>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct PairsVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for PairsVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                pairs.push((key, value));
            }
            Ok(pairs)
        }
    }

    struct Pairs<T>(Vec<(String, T)>);

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Pairs<T> {
        fn deserialize<D2: Deserializer<'de>>(deserializer: D2) -> Result<Self, D2::Error> {
            deserializer
                .deserialize_map(PairsVisitor(PhantomData))
                .map(Pairs)
        }
    }

    Ok(Option::<Pairs<T>>::deserialize(deserializer)?.map(|pairs| pairs.0))
}
