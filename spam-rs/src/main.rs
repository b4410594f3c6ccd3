use anyhow::bail;
use spam_rs::{ClassifierConfig, Corpus, SpamClassifier};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Illustrative self-test: trains on a tiny demo corpus pair and checks
/// the two reference messages classify the way they should.
fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting spam-rs self-test");

    let nonspam = Corpus::from_messages(["Do I like green eggs and ham?", "I do."]);
    let spam = Corpus::from_messages(["I am spam, spam I am.", "I do not like that Spamiam."]);

    let config = ClassifierConfig {
        word_occurance_threshold: 1.0,
        ..ClassifierConfig::default()
    };

    info!("Corpora loaded");
    info!("  Non-spam messages: {}", nonspam.len());
    info!("  Spam messages: {}", spam.len());

    let mut classifier = SpamClassifier::new(nonspam, spam, config);

    let stats = classifier.stats();
    info!("  Tokens with derived probability: {}", stats.scored_tokens);

    let cases = [
        ("do ham like spam do spam", true),
        ("do ham like spam do spam like", false),
    ];

    let mut failures = 0;
    for (message, expected) in cases {
        let result = classifier.score(message);
        if result.is_spam == expected {
            info!(
                combined = result.combined,
                verdict = result.is_spam,
                "\"{message}\""
            );
        } else {
            warn!(
                combined = result.combined,
                verdict = result.is_spam,
                expected, "\"{message}\" misclassified"
            );
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} self-test case(s) misclassified");
    }

    info!("Self-test passed");
    Ok(())
}
