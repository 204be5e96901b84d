pub mod asset_class;
pub mod ordering;
pub mod security;

pub use asset_class::AssetClass;
pub use ordering::by_name;
pub use security::Instrument;
