use anyhow::Context;
use sieve_config::SieveConfig;
use sieve_core::Mode;
use sieve_parser::extractors::structured::build_record;
use sieve_parser::{canonicalize_document, parse_html_with, read_document};

use crate::cli::{CanonArgs, GlobalFlags};
use crate::commands::shared::{apply_canon_flags, canon_options, validated};
use crate::output::render;

/// Handle `sieve canon <file>`.
pub fn handle(args: &CanonArgs, config: &SieveConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut config = config.clone();
    apply_canon_flags(&mut config.canon, &args.canon);
    if args.record_json {
        config.canon.mode = Mode::Structured;
    }
    let config = validated(config)?;

    let decoded = read_document(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;
    tracing::debug!(
        file = %args.file.display(),
        encoding = %decoded.encoding,
        mode = %config.canon.mode,
        "canonicalizing document"
    );

    let options = canon_options(&config.canon);
    let doc = parse_html_with(&decoded.text, &options.parse_options());

    let rendered = if args.record_json {
        render(&build_record(&doc), flags.format)?
    } else {
        canonicalize_document(&doc, &options)
    };
    println!("{rendered}");
    Ok(())
}
