pub mod browse;
pub mod card;
pub mod fill_pack;
pub mod list;
pub mod packs;
pub mod passcode;
pub mod update_ids;
