use rs_markov_core::error::MarkovError;
use rs_markov_core::model::config::MarkovConfig;
use rs_markov_core::model::generator::MarkovChain;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with RUST_LOG=rs_markov_core=trace to see model build and
    // retry details
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The corpus: one sentence per entry, words separated by single spaces
    let corpus = vec![
        "the cheese stands alone in the cellar".to_owned(),
        "the cellar keeps the cheese cool and dry".to_owned(),
        "a cool cheese is a happy cheese".to_owned(),
        "happy cheese makes the village proud".to_owned(),
        "the village keeps a cellar of cheese".to_owned(),
    ];

    let mut config = MarkovConfig::new(corpus);

    // Minimum number of words in a generated sentence (defaults to 10)
    config.min_length = 4;

    // Words that may never end a sentence (compared case-insensitively)
    config.banned_terminals = vec!["cheese".to_owned()];

    // Fix the seed for reproducible output; leave as None for fresh
    // entropy on every run
    config.seed = Some(42);

    let mut chain = MarkovChain::new(config)?;

    // Generate 10 sentences using the configured minimum length
    for i in 0..10 {
        println!("Generated sentence {}: {}", i + 1, chain.generate()?);
    }

    // A per-call override supersedes the configured minimum
    println!("Longer sentence: {}", chain.generate_with_length(8)?);

    // Construction without a corpus fails up front
    match MarkovChain::new(MarkovConfig::default()) {
        Ok(_) => println!("Should not happen"),
        Err(MarkovError::MissingInput) => println!("A corpus is required"),
        Err(e) => println!("Unexpected error: {e}"),
    }

    // A zero minimum length is rejected at the boundary
    let mut bad = MarkovConfig::new(vec!["a b".to_owned()]);
    bad.min_length = 0;
    match MarkovChain::new(bad) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("min_length 0 is invalid: {e}"),
    }

    Ok(())
}
