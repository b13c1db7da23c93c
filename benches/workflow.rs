// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the translation workflow.
//!
//! Measures the performance of:
//! - Step resolution (derived from the store on every view pass)
//! - Language catalog queries backing the picker
//! - Project document (de)serialization

use criterion::{criterion_group, criterion_main, Criterion};
use iced_scribe::domain::{language, LanguageTag, Transcript, Translation, TranslationDraft};
use iced_scribe::project::{ContentStore, ProjectDocument};
use iced_scribe::ui::translations::resolve_step;
use std::hint::black_box;

/// A store with a transcript and one saved translation per catalog root.
fn populated_store() -> ContentStore {
    let mut store = ContentStore::new("benchmark".to_string());
    store.set_transcript(Transcript::new(
        LanguageTag::parse("en").unwrap(),
        "The committee reviewed the quarterly figures in detail.".to_string(),
    ));
    for entry in language::roots() {
        store.set_translation(&entry.to_tag(), format!("[{}] translated text", entry.tag));
    }
    store
}

/// Benchmark step resolution.
///
/// The step is re-derived from the store content on every view pass, so it
/// has to stay cheap even with a fully populated project.
fn bench_resolve_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("workflow");

    let viewing = populated_store();
    let selected = LanguageTag::parse("fr").unwrap();
    group.bench_function("resolve_step_viewing", |b| {
        b.iter(|| black_box(resolve_step(&viewing, Some(&selected))));
    });

    let mut editing = populated_store();
    let mut draft = TranslationDraft::new();
    draft.language = Some(LanguageTag::parse("de").unwrap());
    draft.value = Some("Der Ausschuss prüfte die Quartalszahlen im Detail.".to_string());
    editing.set_draft(draft);
    group.bench_function("resolve_step_editing", |b| {
        b.iter(|| black_box(resolve_step(&editing, None)));
    });

    group.finish();
}

/// Benchmark the language catalog queries behind the picker.
fn bench_language_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("workflow");

    let french = LanguageTag::parse("fr").unwrap();
    group.bench_function("regional_variants", |b| {
        b.iter(|| black_box(language::regional_variants(&french)));
    });

    group.bench_function("display_name", |b| {
        b.iter(|| black_box(language::display_name(&french)));
    });

    group.finish();
}

/// Benchmark project document (de)serialization.
///
/// Save and load both funnel through these calls, one project per file.
fn bench_document_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("workflow");

    let mut document = ProjectDocument::new("benchmark".to_string());
    document.transcript = Some(Transcript::new(
        LanguageTag::parse("en").unwrap(),
        "The committee reviewed the quarterly figures in detail.".repeat(200),
    ));
    for entry in language::roots() {
        document.translations.push(Translation::new(
            entry.to_tag(),
            format!("[{}] translated text", entry.tag).repeat(200),
        ));
    }

    group.bench_function("document_to_json", |b| {
        b.iter(|| black_box(document.to_json().unwrap()));
    });

    let json = document.to_json().unwrap();
    group.bench_function("document_from_json", |b| {
        b.iter(|| black_box(ProjectDocument::from_json(&json).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_step,
    bench_language_catalog,
    bench_document_serialization
);
criterion_main!(benches);
