//! dfgen — random character build generator.
//!
//! Picks a template (or takes one by name), rolls a complete build against
//! the shipped spell prerequisite document, and prints one trait per line
//! with the template's point total at the bottom.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dfgen_logic::{
    generate, merge_traits, total_points, PickPolicy, PrereqTable, RawCondition, Template, Trait,
};

const SPELL_PREREQS: &str = include_str!("../../../data/spell_prereqs.json");

#[derive(Debug, Parser)]
#[command(name = "dfgen", about = "Generate a random character build", version)]
struct Args {
    /// Template to generate, or "random" to let the dice decide.
    #[arg(short, long, default_value = "random")]
    template: String,

    /// RNG seed for reproducible builds.
    #[arg(short, long)]
    seed: Option<u64>,

    /// List the available templates and exit.
    #[arg(short, long)]
    list: bool,

    /// Collapse leveled duplicates into single entries before printing.
    #[arg(short, long)]
    merge: bool,
}

fn load_prereqs() -> Result<PrereqTable> {
    let doc: BTreeMap<String, RawCondition> =
        serde_json::from_str(SPELL_PREREQS).context("parsing spell prerequisite document")?;
    PrereqTable::compile(&doc).context("compiling spell prerequisites")
}

fn resolve_template(name: &str, rng: &mut impl Rng) -> Result<Template> {
    if name.eq_ignore_ascii_case("random") {
        return Ok(Template::ALL[rng.gen_range(0..Template::ALL.len())]);
    }
    match Template::from_name(name) {
        Some(t) => Ok(t),
        None => {
            let known: Vec<&str> = Template::ALL.iter().map(|t| t.name()).collect();
            bail!("unknown template {name:?}; known templates: {}", known.join(", "));
        }
    }
}

fn print_build(template: Template, traits: &[Trait]) {
    println!("{}:", template.name());
    for t in traits {
        println!("  {} [{}]", t.name, t.points);
    }
    println!("Total: [{}]", total_points(traits));
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for t in Template::ALL {
            println!("{}", t.name());
        }
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let prereqs = load_prereqs()?;
    let template = resolve_template(&args.template, &mut rng)?;
    log::info!("generating {}", template.name());

    let traits = generate(template, &prereqs, &PickPolicy::default(), &mut rng)
        .with_context(|| format!("generating {}", template.name()))?;

    if args.merge {
        print_build(template, &merge_traits(&traits));
    } else {
        print_build(template, &traits);
    }
    Ok(())
}
