//! Parsing benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deckmd::{DeckParser, ParseOptions};

/// Build a synthetic deck with the given number of slides.
fn synthetic_deck(slides: usize) -> String {
    let slide = "\
# Benchmark Slide

Intro paragraph with **emphasis** in the middle.

## Section

* first item
* second item
* third item

::: columns 2/1
::: column
### Left
Left column text.
::: column
### Right
> A quote on the right.
:::
:::

::: box highlight
Boxed remark.
:::

::: table json
{\"headers\": [\"Metric\", \"Value\"], \"rows\": [[\"Speed\", 42], [\"Size\", {\"text\": \"ok\", \"style\": \"highlight\"}]]}
:::
";
    vec![slide; slides].join("\n---\n")
}

fn bench_parse(c: &mut Criterion) {
    let small = synthetic_deck(8);
    let large = synthetic_deck(128);

    c.bench_function("parse_8_slides", |b| {
        let parser = DeckParser::with_options(ParseOptions::new().sequential());
        b.iter(|| parser.parse(black_box(&small)).unwrap())
    });

    c.bench_function("parse_128_slides_sequential", |b| {
        let parser = DeckParser::with_options(ParseOptions::new().sequential());
        b.iter(|| parser.parse(black_box(&large)).unwrap())
    });

    c.bench_function("parse_128_slides_parallel", |b| {
        let parser = DeckParser::new();
        b.iter(|| parser.parse(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
