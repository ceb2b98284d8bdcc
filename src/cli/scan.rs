use std::path::Path;

use data_encoding::BASE64;

use crate::classifier::ScanInput;
use crate::cli::commands::ScanArgs;
use crate::config;
use crate::errors::GuardError;
use crate::scanner::build_scanner;

/// One-shot scan from the terminal: same pipeline as the API, verdict
/// printed as JSON.
pub async fn handle_scan(args: ScanArgs) -> Result<(), GuardError> {
    let image_data = match &args.image {
        Some(path) => {
            let bytes = tokio::fs::read(path).await?;
            Some(BASE64.encode(&bytes))
        }
        None => None,
    };

    if args.text.is_none() && image_data.is_none() {
        return Err(GuardError::Config(
            "Nothing to scan: pass --text and/or --image".to_string(),
        ));
    }

    let cfg = config::load_config(args.config.as_deref().map(Path::new)).await?;
    let scanner = build_scanner(&cfg)?;

    let input = ScanInput {
        text: args.text.clone(),
        image_data,
    };
    let report = scanner.scan(&input).await;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", rendered);

    Ok(())
}
