//! Concurrency tests for the template cache and shared templates

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use message_templates::{CacheConfig, MessageTemplate, ScalarValue, TemplateCache};
use pretty_assertions::assert_eq;

const THREADS: usize = 16;

#[test]
fn test_concurrent_get_or_parse_converges() {
    let cache = TemplateCache::new();

    let results: Vec<Arc<MessageTemplate>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| cache.get_or_parse("template {A} with {B,-4:x}")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    let expected = MessageTemplate::parse("template {A} with {B,-4:x}");
    for template in &results {
        assert_eq!(**template, expected);
        assert_eq!(template.tokens(), expected.tokens());
    }
    assert_eq!(cache.len(), 1);

    // racing parses are discarded in favour of the first stored entry
    let stored = cache.get_or_parse("template {A} with {B,-4:x}");
    assert!(results.iter().all(|t| Arc::ptr_eq(t, &stored)));
}

#[test]
fn test_concurrent_distinct_templates() {
    let cache = TemplateCache::with_config(CacheConfig::new().with_max_entries(10_000));

    thread::scope(|scope| {
        for t in 0..THREADS {
            let cache = &cache;
            scope.spawn(move || {
                for i in 0..50 {
                    let text = format!("thread {} item {{Item{}}}", t, i);
                    let template = cache.get_or_parse(&text);
                    assert_eq!(template.text(), text);
                }
            });
        }
    });

    assert_eq!(cache.len(), THREADS * 50);
}

#[test]
fn test_shared_template_renders_in_parallel() {
    let template = Arc::new(MessageTemplate::parse("worker {Id,3} done"));

    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|id| {
                let template = Arc::clone(&template);
                scope.spawn(move || {
                    let mut properties = HashMap::new();
                    properties.insert("Id", ScalarValue::from(id as i64));
                    template
                        .render_to_string(&properties, None)
                        .expect("render failed")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("thread panicked")).collect()
    });

    for (id, output) in outputs.iter().enumerate() {
        assert_eq!(output, &format!("worker {:>3} done", id));
    }
}
