//! Rules built and used from many threads at once

use lexcheck_engine::{
    Checker, CheckerConfig, DashRule, Language, Rule, SentenceBuilder, SharedAutomaton,
    WordSource,
};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 12;

#[test]
fn test_compound_automaton_built_once() {
    let slot = Arc::new(SharedAutomaton::new());
    let barrier = Arc::new(Barrier::new(THREADS));
    let source = WordSource::Embedded {
        name: "concurrent",
        content: "fruit-salad\nwell-known\nlong-term\n",
    };

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let slot = Arc::clone(&slot);
            let barrier = Arc::clone(&barrier);
            let source = source.clone();
            thread::spawn(move || {
                barrier.wait();
                let rule = DashRule::with_compounds(Language::English, &source, &slot).unwrap();
                let sentence = SentenceBuilder::new()
                    .word("fruit", &["NN"])
                    .spaced("–")
                    .word("salad", &["NN"])
                    .build();
                rule.match_sentence(&sentence).unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(slot.build_count(), 1);
    assert!(results.iter().all(|r| r.len() == 1 && *r == results[0]));
}

#[test]
fn test_failed_build_is_reported_to_every_caller() {
    let slot = Arc::new(SharedAutomaton::new());
    let source = WordSource::File("/nonexistent/lexcheck/compounds.txt".into());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let slot = Arc::clone(&slot);
            let source = source.clone();
            thread::spawn(move || DashRule::with_compounds(Language::English, &source, &slot).is_err())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(slot.build_count(), 0);
    assert!(slot.get().is_none());
}

#[test]
fn test_shared_checker_across_threads() {
    let config = CheckerConfig::builder()
        .language("ru")
        .enable_rule("RU_DASH_RULE")
        .build()
        .unwrap();
    let checker = Arc::new(Checker::new(config).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                let sentence = if i % 2 == 0 {
                    SentenceBuilder::new()
                        .word("Он", &[])
                        .word("опоздал", &[])
                        .word("из", &[])
                        .spaced("—")
                        .word("за", &[])
                        .word("дождя", &[])
                        .punct(".")
                        .build()
                } else {
                    SentenceBuilder::new()
                        .word("Он", &[])
                        .word("опоздал", &[])
                        .word("из-за", &[])
                        .word("дождя", &[])
                        .punct(".")
                        .build()
                };
                checker.check(&sentence).unwrap().len()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), usize::from(i % 2 == 0));
    }
}
