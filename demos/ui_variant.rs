use std::collections::BTreeMap;

use rand::rngs::StdRng;
use vose_alias::{AliasSampler, AliasTable, SharedSource, WeightedChoice};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Weights as they would arrive from a settings file; they need not sum to one.
    let configured = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "15, 85".to_owned());

    // One generator feeds every draw below.
    let src: SharedSource<StdRng> = SharedSource::seeded(2024);

    let table: AliasTable = configured.parse()?;
    let layout = AliasSampler::from_table(table, src.clone());

    let theme = WeightedChoice::from_pairs([("light", 3.0), ("dark", 2.0), ("contrast", 0.5)])?;

    let mut hist: BTreeMap<(usize, &str), u64> = BTreeMap::new();
    for _ in 0..100_000 {
        let variant = layout.next();
        let name = src.with(|rng| *theme.sample(rng));
        *hist.entry((variant, name)).or_default() += 1;
    }

    for ((variant, name), count) in hist {
        println!("{count: >6} layout={variant} theme={name}");
    }

    Ok(())
}
