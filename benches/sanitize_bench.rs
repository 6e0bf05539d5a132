use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use profilecss::validate_and_sanitize;
use std::fmt::Write;

fn generate_stylesheet(rules: usize) -> String {
  let mut css = String::new();
  for i in 0..rules {
    let _ = write!(
      css,
      ".profile-link.c{} {{ color: #33{:02x}66; background: url(https://cdn.example.com/bg{}.png) no-repeat; margin: {}px; behavior: url(evil.htc) }}\n",
      i,
      i % 256,
      i,
      i % 32,
    );
  }
  css
}

fn bench_sanitize(c: &mut Criterion) {
  let small = generate_stylesheet(10);
  let large = generate_stylesheet(200);

  c.bench_function("sanitize_small", |b| {
    b.iter(|| validate_and_sanitize(black_box(&small)))
  });
  c.bench_function("sanitize_large", |b| {
    b.iter(|| validate_and_sanitize(black_box(&large)))
  });
}

criterion_group!(benches, bench_sanitize);
criterion_main!(benches);
