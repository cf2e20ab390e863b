pub mod asset;

pub use asset::AssetRecord;
