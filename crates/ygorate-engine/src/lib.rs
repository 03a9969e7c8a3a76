pub mod catalog;
pub mod error;
pub mod loader;
pub mod review;
pub mod view;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use loader::{discover_pack_files, load_pack_file, load_packs, LoadedPack};
pub use review::{resolve_review, FsReviewStore, ReviewStore};
pub use view::{ViewMode, ViewState};
