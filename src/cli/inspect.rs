use clap::Args;
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::{DataArgs, OutputFormat};
use crate::store::dataset::DatasetStore;

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

/// Count records per chromosome, in chromosome name order.
pub fn chromosome_counts<'a>(chroms: impl IntoIterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for chrom in chroms {
        *counts.entry(chrom).or_insert(0) += 1;
    }
    counts
}

fn describe_source(path: Option<&Path>) -> String {
    match path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (missing)", path.display()),
        None => "not configured".to_string(),
    }
}

/// Load the datasets and print what was found.
///
/// # Errors
///
/// Returns an error if any required dataset cannot be loaded.
pub fn run(args: InspectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let store = DatasetStore::load(&args.data.paths())?;
    let summary = store.summary();

    let gene_chroms = chromosome_counts(store.genes().iter().map(|g| g.chrom.as_str()));
    let recomb_chroms = chromosome_counts(store.recomb().chromosome.iter().map(String::as_str));

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "summary": summary,
                "gene_chromosomes": gene_chroms,
                "recomb_chromosomes": recomb_chroms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("Genes:          {}", summary.genes);
            println!(
                "LD pairs:       {} ({} undecodable entries dropped)",
                summary.ld_pairs, summary.ld_dropped
            );
            println!("Recomb rows:    {}", summary.recomb_rows);
            println!(
                "Variants:       {}",
                describe_source(summary.variants.as_deref())
            );
            println!(
                "Test variants:  {}",
                describe_source(summary.test_variants.as_deref())
            );

            if verbose {
                println!();
                println!("Genes per chromosome:");
                for (chrom, count) in &gene_chroms {
                    println!("  {chrom:<8} {count}");
                }
                println!("Recomb rows per chromosome:");
                for (chrom, count) in &recomb_chroms {
                    println!("  {chrom:<8} {count}");
                }
            }
        }
    }

    Ok(())
}
