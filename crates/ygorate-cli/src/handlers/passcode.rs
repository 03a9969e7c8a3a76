use anyhow::Result;
use std::path::Path;
use ygorate_client::CardApi;
use ygorate_runtime::{lookup_passcode, PasscodeOptions};

/// Prints only the passcode so the output can be piped into other tools.
/// Exit code 2 means the lookup ran but found nothing.
pub fn handle(data_dir: &Path, api: &CardApi, name: &str, options: PasscodeOptions) -> Result<i32> {
    let runtime = tokio::runtime::Runtime::new()?;
    let id = runtime.block_on(lookup_passcode(data_dir, api, name, &options))?;

    match id {
        Some(id) => {
            println!("{}", id);
            Ok(0)
        }
        None => {
            eprintln!("No passcode found for '{}'", name);
            Ok(2)
        }
    }
}
