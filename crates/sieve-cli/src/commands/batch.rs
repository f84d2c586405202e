use sieve_config::SieveConfig;

use crate::cli::{BatchArgs, GlobalFlags};
use crate::commands::shared::{apply_canon_flags, canon_options, validated};
use crate::output::output;
use crate::pipeline::BatchPlan;

/// Handle `sieve batch <input_dir> <output_dir>`.
pub fn handle(args: &BatchArgs, config: &SieveConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = validated(effective_config(args, config))?;

    let plan = BatchPlan {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        options: canon_options(&config.canon),
        batch: config.batch,
    };
    let report = plan.run("canonicalizing")?;

    output(&report, flags.format)
}

fn effective_config(args: &BatchArgs, config: &SieveConfig) -> SieveConfig {
    let mut config = config.clone();
    apply_canon_flags(&mut config.canon, &args.canon);

    let batch = &mut config.batch;
    if let Some(workers) = args.workers {
        batch.workers = workers;
    }
    if let Some(extensions) = &args.extensions {
        batch.extensions.clone_from(extensions);
    }
    if let Some(extension) = &args.output_extension {
        batch.output_extension.clone_from(extension);
    }
    if args.create_output {
        batch.create_output_dir = true;
    }
    config
}
