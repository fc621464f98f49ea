//! Collects a batch of mix-valid layouts and prints them in the JSON shape a
//! web front end consumes: summary stats, per-rule status, and the flat
//! `{type, x, y, w, h}` records for every tower.
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use siteplan::prelude::*;

fn main() -> anyhow::Result<()> {
    let generator = LayoutGenerator::new(SiteConfig::default());
    let mut rng = StdRng::seed_from_u64(11);
    let mut layouts = Vec::new();

    for target in [6usize, 10, 14] {
        let Some(result) =
            generator.generate_valid(&GenerateOptions::new(target), 50, &mut rng)?
        else {
            continue;
        };
        let summary = LayoutSummary::from_layout(&result.layout, generator.config());
        layouts.push(json!({
            "id": layouts.len() + 1,
            "towersA": summary.towers_a,
            "towersB": summary.towers_b,
            "builtArea": summary.built_area,
            "rules": summary.rules,
            "buildings": result.layout.records(),
        }));
    }

    println!("{}", serde_json::to_string_pretty(&json!({ "layouts": layouts }))?);

    Ok(())
}
