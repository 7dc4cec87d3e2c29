use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mdpipe_core::{ListMode, Pipeline, PipelineOptions};

const SMALL: &str = "# Hi\n\nThis is **bold** and *italic*.";

const LARGE_SECTION: &str = r#"## Section

Some *text* with a [link](https://example.com) and **strong** words.

- first item
- second item
- third item

1. one
2. two

```
fn main() {
    println!("hello");
}
```

> quoted line
> another quoted line

---
"#;

fn bench_convert(c: &mut Criterion) {
  let large = LARGE_SECTION.repeat(200);
  let mut group = c.benchmark_group("convert");

  for mode in [ListMode::Greedy, ListMode::Grouped] {
    let pipeline =
      Pipeline::with_options(PipelineOptions::with_list_mode(mode));

    group.bench_with_input(BenchmarkId::new("small", mode), SMALL, |b, doc| {
      b.iter(|| pipeline.convert(black_box(doc)));
    });
    group.bench_with_input(
      BenchmarkId::new("large", mode),
      large.as_str(),
      |b, doc| {
        b.iter(|| pipeline.convert(black_box(doc)));
      },
    );
  }

  group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
