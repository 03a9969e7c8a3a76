pub mod error;
pub mod ops;

pub use error::{Error, Result};
pub use ops::fill_pack::{fill_pack, FillPackOptions, FillPackReport};
pub use ops::passcode::{lookup_passcode, PasscodeOptions};
pub use ops::update_ids::{update_ids, UpdateEvent, UpdateIdsOptions, UpdateIdsReport};
