//! Country dataset and the filter/sort controller over it.

mod collate;
mod filter;
mod model;
mod view;

pub use collate::{collation_key, compare_names};
pub use filter::{
    Continent, ContinentChoice, SortKey, SubregionChoice, TopMetric, ViewFilter,
};
pub use model::{CountryName, CountryRecord, Currency, Flags, Maps};
pub use view::{subregion_index, top_n, Catalog, TOP_N};
