//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use ygorate_testing::DataRoot;

// Unroutable endpoint so offline tests never hit the real card database.
const OFFLINE_API: &str = "http://127.0.0.1:9";

pub struct TestFixture {
    data_root: DataRoot,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            data_root: DataRoot::new(),
        }
    }

    pub fn data_root(&self) -> &DataRoot {
        &self.data_root
    }

    pub fn data_dir(&self) -> &Path {
        self.data_root.path()
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ygorate");
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--api-url")
            .arg(OFFLINE_API);
        cmd
    }

    /// Two packs, four cards, one inline review and one review file.
    pub fn seed_sample_packs(&self) {
        use ygorate_testing::fixtures::card;

        let mut kuriboh = card("Kuriboh", Some(40640057), 7.0);
        kuriboh.review_text = Some("Surprisingly useful chump blocker.".to_string());

        let mut tri_horned = card("Tri-Horned Dragon", Some(78984772), 4.5);
        tri_horned.review_file = Some("tri-horned.txt".to_string());

        self.data_root
            .write_pack(
                "LegendBEWD",
                "Legend of Blue Eyes White Dragon",
                vec![card("Blue-Eyes White Dragon", Some(89631139), 10.0), tri_horned],
            )
            .unwrap();
        self.data_root
            .write_pack(
                "MetalRaiders",
                "Metal Raiders",
                vec![card("Summoned Skull", Some(70781052), 8.0), kuriboh],
            )
            .unwrap();
        self.data_root
            .write_review("LegendBEWD", "tri-horned.txt", "Big stats, no protection.")
            .unwrap();
    }
}
