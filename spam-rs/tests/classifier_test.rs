use spam_rs::{ClassifierConfig, Corpus, SpamClassifier};

fn demo_corpora() -> (Corpus, Corpus) {
    let nonspam = Corpus::from_messages(["Do I like green eggs and ham?", "I do."]);
    let spam = Corpus::from_messages(["I am spam, spam I am.", "I do not like that Spamiam."]);
    (nonspam, spam)
}

fn demo_config() -> ClassifierConfig {
    ClassifierConfig {
        word_occurance_threshold: 1.0,
        ..ClassifierConfig::default()
    }
}

#[test]
fn test_reference_corpus_verdicts() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    // One extra "like" (a non-spam corpus word) shifts the combined odds
    // back below the threshold.
    assert!(classifier.is_spam("do ham like spam do spam"));
    assert!(!classifier.is_spam("do ham like spam do spam like"));
}

#[test]
fn test_unknown_tokens_are_not_spam() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    // Every token is absent from both corpora, so each scores the default
    // probability; with default_probability < probability_threshold the
    // verdict must be non-spam.
    let result = classifier.score("completely unrelated wording");
    assert!(!result.is_spam);
    assert!(result.combined < classifier.config().probability_threshold);
}

#[test]
fn test_empty_message_is_not_spam() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    let result = classifier.score("");
    assert!(result.tokens.is_empty());
    assert!((result.combined - 0.5).abs() < 1e-12);
    assert!(!result.is_spam);
}

#[test]
fn test_update_is_idempotent() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    classifier.update();
    let first = classifier.probabilities().clone();
    classifier.update();
    let second = classifier.probabilities().clone();

    assert_eq!(first, second);
}

#[test]
fn test_nonspam_importance_ratio_is_monotone() {
    // "offer" appears once in each corpus; raising the ratio weights the
    // non-spam evidence more, so its spam probability must never increase.
    let mut previous = f64::INFINITY;
    for ratio in [1.0, 2.0, 4.0, 8.0] {
        let config = ClassifierConfig {
            word_occurance_threshold: 1.0,
            nonspam_importance_ratio: ratio,
            ..ClassifierConfig::default()
        };
        let classifier = SpamClassifier::new(
            Corpus::from_messages(["offer stands", "see you"]),
            Corpus::from_messages(["offer inside", "act fast"]),
            config,
        );

        let probability = classifier.probabilities().lookup("offer");
        assert!(probability <= previous);
        previous = probability;
    }
}

#[test]
fn test_at_most_fifteen_tokens_participate() {
    // Sixteen spam-only tokens (probability 0.99) and four tokens shared
    // between the corpora (probability 1/3, less interesting). The cap
    // keeps the fifteen most extreme; ties resolve in message order, so
    // "sp" is the one extreme token dropped.
    let nonspam = Corpus::from_messages(["ma mb mc md", "plain filler"]);
    let spam = Corpus::from_messages(["sa sb sc sd se sf sg sh si sj sk sl sm sn so sp", "ma mb mc md"]);
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    let result =
        classifier.score("sa sb sc sd se sf sg sh si sj sk sl sm sn so sp ma mb mc md");

    assert_eq!(result.tokens.len(), 15);
    assert!(result.tokens.iter().all(|t| t.token.starts_with('s')));
    assert!(result.tokens.iter().all(|t| t.token != "sp"));

    // Hand-computed combination over fifteen 0.99 tokens.
    let spam_product = 0.99f64.powi(15);
    let nonspam_product = 0.01f64.powi(15);
    let expected = spam_product / (spam_product + nonspam_product);
    assert!((result.combined - expected).abs() < 1e-12);
    assert!(result.is_spam);
}

#[test]
fn test_unique_tokens_deduplicates_before_ranking() {
    let (nonspam, spam) = demo_corpora();
    let config = ClassifierConfig {
        unique_tokens: true,
        ..demo_config()
    };
    let mut classifier = SpamClassifier::new(nonspam, spam, config);

    let result = classifier.score("spam spam spam");
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].token, "spam");
}

#[test]
fn test_repeated_tokens_amplify_without_unique_tokens() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    // "like" appears in the non-spam corpus; every repetition multiplies
    // its odds contribution in again.
    let once = classifier.score("spam spam like").combined;
    let repeated = classifier.score("spam spam like like").combined;
    assert!(repeated < once);
}

#[test]
fn test_learning_appends_spam_verdict_to_spam_corpus() {
    let (nonspam, spam) = demo_corpora();
    let config = ClassifierConfig {
        learning: true,
        ..demo_config()
    };
    let mut classifier = SpamClassifier::new(nonspam.clone(), spam.clone(), config);

    let message = "do ham like spam do spam";
    assert!(classifier.is_spam(message));

    assert_eq!(spam.len(), 3);
    assert_eq!(spam.messages().last().map(String::as_str), Some(message));
    assert_eq!(nonspam.len(), 2);
}

#[test]
fn test_learning_appends_nonspam_verdict_to_nonspam_corpus() {
    let (nonspam, spam) = demo_corpora();
    let config = ClassifierConfig {
        learning: true,
        ..demo_config()
    };
    let mut classifier = SpamClassifier::new(nonspam.clone(), spam.clone(), config);

    let message = "green eggs and ham";
    assert!(!classifier.is_spam(message));

    assert_eq!(nonspam.len(), 3);
    assert_eq!(nonspam.messages().last().map(String::as_str), Some(message));
    assert_eq!(spam.len(), 2);
}

#[test]
fn test_learning_disabled_leaves_corpora_untouched() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam.clone(), spam.clone(), demo_config());

    classifier.is_spam("do ham like spam do spam");

    assert_eq!(nonspam.len(), 2);
    assert_eq!(spam.len(), 2);
}

#[test]
fn test_explicit_learning_ignores_learning_flag() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam.clone(), spam.clone(), demo_config());
    assert!(!classifier.config().learning);

    classifier.learn_spam("cheap pills inside");
    classifier.learn_nonspam("lunch at noon?");

    assert_eq!(spam.messages().last().map(String::as_str), Some("cheap pills inside"));
    assert_eq!(nonspam.messages().last().map(String::as_str), Some("lunch at noon?"));
}

#[test]
fn test_learned_messages_shift_later_verdicts() {
    let nonspam = Corpus::from_messages(["see you at lunch", "meeting moved to noon"]);
    let spam = Corpus::from_messages(["win a free prize", "free money now"]);
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    assert!(!classifier.is_spam("quarterly report attached"));

    // Teach the exact wording as spam; the rebuilt table now carries its
    // tokens as spam-only priors.
    classifier.learn_spam("quarterly report attached");
    classifier.learn_spam("quarterly report attached again");

    assert!(classifier.is_spam("quarterly report attached"));
}

#[test]
fn test_score_and_is_spam_agree() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    let message = "do ham like spam do spam";
    let result = classifier.score(message);
    assert_eq!(result.is_spam, classifier.is_spam(message));
    assert!(result.tokens.len() <= 15);
}

#[test]
fn test_stats_reflect_corpora_and_table() {
    let (nonspam, spam) = demo_corpora();
    let mut classifier = SpamClassifier::new(nonspam, spam, demo_config());

    let stats = classifier.stats();
    assert_eq!(stats.nonspam_messages, 2);
    assert_eq!(stats.spam_messages, 2);
    assert!(stats.scored_tokens > 0);

    classifier.learn_spam("another spam example");
    let stats = classifier.stats();
    assert_eq!(stats.spam_messages, 3);
}
