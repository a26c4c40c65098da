//! Init command

use anyhow::{anyhow, Context as _, Result};
use cfngin_core::config::generate_config;
use cfngin_core::templates::ConfigInitContext;
use std::collections::BTreeMap;

use crate::cli::InitArgs;
use crate::output;

pub fn run(args: InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow!(
            "File {} already exists. Use --force to overwrite.",
            args.output
        ));
    }

    let namespace = args.namespace.unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "example".to_string())
            .to_lowercase()
            .replace([' ', '_'], "-")
    });

    let mut context = ConfigInitContext::new(&namespace, &args.region);
    context.bucket_region = args.bucket_region;
    context.bucket_name = args.bucket_name;
    context.kms_key_id = args.kms_key_id;
    context.tags = parse_tags(&args.tags)?;

    let content = generate_config(&context)
        .map_err(|e| anyhow!("Failed to generate config: {}", e))?;

    std::fs::write(&args.output, content)
        .with_context(|| format!("Failed to write {}", args.output))?;

    output::success(&format!("Created {}", args.output));
    output::info(&format!("Namespace: {}", namespace));
    output::info(&format!("Region: {}", args.region));

    Ok(())
}

/// Parse repeated `KEY=VALUE` tag arguments
fn parse_tags(raw: &[String]) -> Result<BTreeMap<String, String>> {
    raw.iter()
        .map(|tag| match tag.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(anyhow!("Invalid tag '{}': expected KEY=VALUE", tag)),
        })
        .collect()
}
