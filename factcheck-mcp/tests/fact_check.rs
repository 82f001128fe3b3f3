//! End-to-end pipeline checks mirroring the service's advertised behavior.

use factcheck_mcp::models::{CapitalTable, Claim, McpEnvelope, VerdictKind};
use factcheck_mcp::pipeline::{FactCheckPipeline, PatternExtractor, TableVerifier};

fn pipeline() -> FactCheckPipeline<PatternExtractor, TableVerifier> {
    FactCheckPipeline {
        extractor: PatternExtractor,
        verifier: TableVerifier::new(CapitalTable::builtin()),
    }
}

#[test]
fn every_builtin_pair_verifies_as_correct() {
    let pipeline = pipeline();
    for (country, capital) in pipeline.verifier.table().iter() {
        let claim = Claim::new(format!("The capital of {} is {}", country, capital));
        let verdict = pipeline.check(&claim);
        assert_eq!(
            verdict.kind,
            VerdictKind::Correct,
            "{}: {}",
            country,
            verdict.explanation
        );
        assert_eq!(verdict.confidence, 0.95);
    }
}

#[test]
fn every_builtin_pair_rejects_a_wrong_capital() {
    let pipeline = pipeline();
    for (country, capital) in pipeline.verifier.table().iter() {
        let claim = Claim::new(format!("The capital of {} is Gotham City", country));
        let verdict = pipeline.check(&claim);
        assert_eq!(verdict.kind, VerdictKind::Incorrect, "{}", country);
        assert_eq!(verdict.confidence, 0.95);
        assert!(
            verdict.explanation.contains(capital),
            "explanation should name {}: {}",
            capital,
            verdict.explanation
        );
    }
}

#[test]
fn the_readme_examples_hold() {
    let pipeline = pipeline();

    let verdict = pipeline.check(&Claim::new("The capital of France is Paris"));
    assert_eq!(verdict.kind, VerdictKind::Correct);
    assert_eq!(verdict.confidence, 0.95);

    let verdict = pipeline.check(&Claim::new("The capital of France is London"));
    assert_eq!(verdict.kind, VerdictKind::Incorrect);
    assert_eq!(verdict.confidence, 0.95);
    assert!(verdict.explanation.contains("Paris"));

    let verdict = pipeline.check(&Claim::new("Bananas are yellow"));
    assert_eq!(verdict.kind, VerdictKind::Unparseable);
    assert_eq!(verdict.confidence, 0.0);

    let verdict = pipeline.check(&Claim::new("The capital of Wakanda is Birnin Zana"));
    assert_eq!(verdict.kind, VerdictKind::UnknownCountry);
    assert_eq!(verdict.confidence, 0.5);
}

#[test]
fn alternative_capital_spellings_verify() {
    let pipeline = pipeline();
    for claim in [
        "The capital of United States is Washington, D.C.",
        "The capital of United States is Washington DC",
        "The capital of South Korea is Seoul",
    ] {
        let verdict = pipeline.check(&Claim::new(claim));
        assert_eq!(verdict.kind, VerdictKind::Correct, "{claim}");
    }
}

#[test]
fn verdicts_wrap_into_the_envelope() {
    let pipeline = pipeline();
    let verdict = pipeline.check(&Claim::new("The capital of Japan is Beijing"));
    let envelope = McpEnvelope::from_verdict(&verdict);
    assert_eq!(envelope.version, "1.0");
    assert_eq!(envelope.context.claim, "The capital of Japan is Beijing");
    assert!(envelope.context.correct_answer.starts_with("Incorrect."));
    assert_eq!(envelope.context.confidence, 0.95);
}
