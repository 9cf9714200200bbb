use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rarena::{Arena, Direction, Down, Up};

#[allow(dead_code)]
struct Mixed {
  a: i32,
  b: f64,
  c: u8,
}

fn single<D: Direction>() {
  let mut arena = Arena::<D>::new(4096).unwrap();
  let i = arena.allocate::<i32>(1).unwrap();
  unsafe { i.as_ptr().write(42) };
  black_box(i);
}

fn big<D: Direction>() {
  let mut arena = Arena::<D>::new(1600).unwrap();
  black_box(arena.allocate::<i32>(100));
  black_box(arena.allocate::<f64>(100));
  black_box(arena.allocate::<u8>(100));
  black_box(arena.allocate::<i16>(100));
}

fn mixed_sizes<D: Direction>() {
  let mut arena = Arena::<D>::new(4096).unwrap();
  let i = arena.allocate::<i32>(20).unwrap();
  let d = arena.allocate::<f64>(200).unwrap();
  let c = arena.allocate::<u8>(3).unwrap();
  let st = arena.allocate::<Mixed>(50).unwrap();

  unsafe {
    i.as_ptr().write(42);
    d.as_ptr().write(2.5);
    c.as_ptr().write(b'A');
    st.as_ptr().write(Mixed { a: 42, b: 2.5, c: b'A' });
  }
  black_box((i, d, c, st));
}

fn loop_then_reset<D: Direction>(arena: &mut Arena<D>) {
  for _ in 0..100 {
    black_box(arena.allocate::<i32>(1));
  }
  arena.reset().unwrap();
}

fn scenarios<D: Direction>(c: &mut Criterion) {
  let mut group = c.benchmark_group(format!("arena_{}", D::NAME));

  group.bench_function("single_allocation", |b| b.iter(single::<D>));
  group.bench_function("big_allocations", |b| b.iter(big::<D>));
  group.bench_function("mixed_size_allocations", |b| b.iter(mixed_sizes::<D>));

  let mut arena = Arena::<D>::new(4096).unwrap();
  group.bench_function("loop_allocate_and_reset", |b| {
    b.iter(|| loop_then_reset(&mut arena))
  });

  group.finish();
}

fn arena_benchmark(c: &mut Criterion) {
  scenarios::<Up>(c);
  scenarios::<Down>(c);
}

criterion_group!(benches, arena_benchmark);
criterion_main!(benches);
