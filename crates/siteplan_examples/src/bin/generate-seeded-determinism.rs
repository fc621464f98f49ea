//! Same seed, same layout: generation is reproducible end to end because the
//! random source is injected rather than owned by the generator.
use rand::rngs::StdRng;
use rand::SeedableRng;
use siteplan::prelude::*;

fn main() -> anyhow::Result<()> {
    let generator = LayoutGenerator::new(SiteConfig::default());
    let options = GenerateOptions::new(8);

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let a = generator.generate(&options, &mut rng_a)?;
    let b = generator.generate(&options, &mut rng_b)?;

    assert_eq!(a.layout.records(), b.layout.records());
    println!(
        "seed 42 reproduces {} towers, verdict: {}",
        a.layout.towers.len(),
        a.reason()
    );

    Ok(())
}
