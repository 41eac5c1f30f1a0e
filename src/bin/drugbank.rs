//! `drugbank` command line front-end.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drugbank::chart::{ChartSink, TextChart, histogram, split_series};
use drugbank::extract::{ExtractSpec, Extractor, Table};
use drugbank::output::{render_record, render_table, write_table};
use drugbank::synth::RandomSampler;
use drugbank::{Document, Settings, tables};

#[derive(Parser)]
#[command(name = "drugbank")]
#[command(about = "Extract tables from a DrugBank XML export and inflate it with synthetic drugs", long_about = None)]
struct Cli {
    /// DrugBank XML export (overrides the settings file)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Write the resulting table here (.csv or .json)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// YAML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One row per drug with its descriptive fields
    Drugs,

    /// Drug synonyms
    Synonyms {
        /// Print the synonym graph of this DrugBank id as DOT
        #[arg(long)]
        graph: Option<String>,
    },

    /// Marketed products with their regulatory agency
    Products,

    /// Pathways and their participating drugs
    Pathways {
        /// Print the pathway/drug bipartite graph as DOT
        #[arg(long)]
        graph: bool,
    },

    /// Number of pathways each drug takes part in
    PathwayCounts {
        /// Also draw a histogram of the counts
        #[arg(long)]
        histogram: bool,
    },

    /// Drug targets with polypeptide details
    Targets,

    /// Cellular locations of targets, most common first
    Locations {
        /// Locations shown before the rest is grouped as "Other"
        #[arg(long, default_value_t = tables::LOCATION_TOP_N)]
        top: usize,
    },

    /// Approval status counts
    Status,

    /// Drug-drug interactions
    Interactions,

    /// Drugs targeting a gene, with their products
    Gene {
        /// Gene name (case-insensitive)
        gene: String,

        /// Print the gene/drug/product network as DOT
        #[arg(long)]
        graph: bool,
    },

    /// Full record of one drug, with UniProt annotations
    Details {
        /// DrugBank id, e.g. DB00001
        drug_id: String,

        /// Skip the UniProt lookup
        #[arg(long)]
        offline: bool,
    },

    /// Append synthetic drugs until the export holds `target` drugs
    Generate {
        /// Total number of drugs after generation
        #[arg(long)]
        target: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Where to write the inflated export
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Serve POST /drug_count over HTTP
    #[cfg(feature = "server")]
    Serve {
        /// Address to bind, e.g. 127.0.0.1:8000
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let mut settings = match &cli.config {
        Some(path) => Settings::from_yaml_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(input) = &cli.input {
        settings.input = input.clone();
    }

    run(cli.command, &settings, cli.output.as_deref())
}

/// Parsed export plus an extractor bound to its namespace.
fn load(settings: &Settings) -> Result<(Document, Extractor)> {
    let document = Document::from_path(&settings.input)
        .with_context(|| format!("Failed to read {}", settings.input.display()))?;
    let extractor = Extractor::new(settings.namespace_for(&document));
    Ok((document, extractor))
}

fn extract(settings: &Settings, spec: &ExtractSpec) -> Result<Table> {
    let (document, extractor) = load(settings)?;
    Ok(extractor.run(&document, spec))
}

/// Print `table` and, if requested, save it.
fn emit(table: &Table, output: Option<&Path>) -> Result<()> {
    print!("{}", render_table(table));
    if let Some(path) = output {
        write_table(table, path).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

fn plot(pairs: &[(impl ToString, usize)], title: &str) -> Result<()> {
    let (labels, values) = split_series(pairs);
    TextChart::new(std::io::stdout().lock()).plot(&labels, &values, title)?;
    Ok(())
}

fn run(command: Commands, settings: &Settings, output: Option<&Path>) -> Result<()> {
    match command {
        Commands::Drugs => emit(&extract(settings, &tables::drug_spec())?, output),

        Commands::Synonyms { graph } => {
            let table = extract(settings, &tables::synonym_spec())?;
            emit(&table, output)?;
            if let Some(drug_id) = graph {
                print!("{}", tables::synonym_graph(&table, &drug_id)?.to_dot());
            }
            Ok(())
        }

        Commands::Products => emit(&extract(settings, &tables::product_spec())?, output),

        Commands::Pathways { graph } => {
            let table = extract(settings, &tables::pathway_spec())?;
            emit(&table, output)?;
            println!("\nTotal number of pathways: {}", table.len());
            if graph {
                print!("{}", tables::bipartite_graph(&table).to_dot());
            }
            Ok(())
        }

        Commands::PathwayCounts { histogram: draw } => {
            let pathways = extract(settings, &tables::pathway_spec())?;
            let counts = tables::pathway_drug_counts(&pathways);
            println!("Drug: pathway count:");
            for (drug, count) in tables::sorted_counts(&counts) {
                println!("{drug}: {count}");
            }
            if draw {
                let bins = histogram(counts.values().copied());
                plot(bins.as_slice(), "Pathways per Drug")?;
            }
            Ok(())
        }

        Commands::Targets => emit(&extract(settings, &tables::target_spec())?, output),

        Commands::Locations { top } => {
            let targets = extract(settings, &tables::target_spec())?;
            if let Some(path) = output {
                write_table(&targets, path)?;
            }
            let counts = tables::location_counts(&targets, top);
            plot(
                counts.as_slice(),
                "The percentage occurrence of targets in different parts of the cell",
            )
        }

        Commands::Status => {
            let status = extract(settings, &tables::status_spec())?;
            if let Some(path) = output {
                write_table(&status, path)?;
            }
            let summary = tables::StatusSummary::from_table(&status);
            let sorted = summary.sorted_counts();
            for (label, count) in &sorted {
                println!("{label:<30} {count}");
            }
            println!("Approved but not withdrawn: {}", summary.approved_not_withdrawn);
            plot(sorted.as_slice(), "Drug Status Distribution")
        }

        Commands::Interactions => emit(&extract(settings, &tables::interaction_spec())?, output),

        Commands::Gene { gene, graph } => {
            let (document, extractor) = load(settings)?;
            let table = tables::drugs_for_gene(&document, &extractor, &gene)?;
            emit(&table, output)?;
            if graph {
                print!("{}", tables::gene_network(&table, gene.trim()).to_dot());
            }
            Ok(())
        }

        Commands::Details { drug_id, offline } => details(settings, &drug_id, offline, output),

        Commands::Generate { target, seed, out } => {
            let mut generator_settings = settings.generator.clone();
            if let Some(target) = target {
                generator_settings.target_total = target;
            }
            let out = out.unwrap_or_else(|| generator_settings.output.clone());

            let document = Document::from_path(&settings.input)
                .with_context(|| format!("Failed to read {}", settings.input.display()))?;
            let generator = generator_settings.generator(settings.namespace_for(&document));
            let mut sampler = match seed.or(generator_settings.seed) {
                Some(seed) => RandomSampler::seeded(seed),
                None => RandomSampler::from_entropy(),
            };

            let generated = generator.generate(&document, &mut sampler)?;
            generated
                .document
                .write_to_path(&out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!(
                "Original drugs: {}, generated: {}, written to {}",
                generated.report.original_count,
                generated.report.synthesized_count,
                out.display()
            );
            Ok(())
        }

        #[cfg(feature = "server")]
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.server.bind.clone());
            let state = drugbank::service::AppState::new(settings.input.clone(), settings.namespace());
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            runtime.block_on(drugbank::service::serve(&bind, state))?;
            Ok(())
        }
    }
}

fn details(settings: &Settings, drug_id: &str, offline: bool, output: Option<&Path>) -> Result<()> {
    let table = extract(settings, &tables::detail_spec())?;
    let mut record = tables::find_drug(&table, drug_id)?.clone();

    let uniprot = match record.text("uniprot_id") {
        Some(id) if !offline => fetch_uniprot(settings, id)?,
        _ => Default::default(),
    };
    record.insert("function", Some(uniprot.function.into()));
    record.insert(
        "subcellular_location",
        Some(uniprot.subcellular_location.into()),
    );

    print!("{}", render_record(&record));
    if let Some(path) = output {
        let mut columns: Vec<String> = table.columns().to_vec();
        columns.extend(["function".to_string(), "subcellular_location".to_string()]);
        let mut single = Table::new(columns);
        single.push(record);
        write_table(&single, path)?;
    }
    Ok(())
}

#[cfg(feature = "remote")]
fn fetch_uniprot(settings: &Settings, id: &str) -> Result<drugbank::remote::UniprotDetails> {
    tracing::info!("Fetching UniProt data for {id}");
    let client = drugbank::remote::UniprotClient::new(
        settings.uniprot.base_url.as_str(),
        settings.uniprot.timeout(),
    )?;
    Ok(client.fetch(id))
}

#[cfg(not(feature = "remote"))]
fn fetch_uniprot(_settings: &Settings, id: &str) -> Result<drugbank::remote::UniprotDetails> {
    tracing::warn!("Built without the \"remote\" feature; skipping UniProt lookup for {id}");
    Ok(Default::default())
}
