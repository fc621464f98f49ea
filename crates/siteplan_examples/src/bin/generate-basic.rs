use rand::rngs::StdRng;
use rand::SeedableRng;
use siteplan::prelude::*;
use siteplan_examples::render_layout_ascii;

fn main() -> anyhow::Result<()> {
    let generator = LayoutGenerator::new(SiteConfig::default());
    let mut rng = StdRng::seed_from_u64(2025);

    let result = generator.generate(&GenerateOptions::new(10), &mut rng)?;
    let summary = LayoutSummary::from_layout(&result.layout, generator.config());

    println!("{}", render_layout_ascii(&result.layout, generator.config(), 4.0));
    println!(
        "placed {} towers ({} A / {} B), built area {}, verdict: {}",
        result.layout.towers.len(),
        summary.towers_a,
        summary.towers_b,
        summary.built_area,
        result.reason()
    );

    Ok(())
}
