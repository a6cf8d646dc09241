use classic_algorithms::data_structure::dynamic_array::DynamicArray;
use classic_algorithms::interface::list::List;
use classic_algorithms::sort::{insertion_sort, merge_sort, shell_sort};
use classic_algorithms::util::rand_util::unique_rand_int_vec;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn dynamic_array_bench(c: &mut Criterion) {
    c.bench_function("DynamicArray Bench", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for i in 0..100 {
                array.append(i.to_string());
            }
            for _i in 0..100 {
                black_box(array.remove_at(0).ok());
            }
        })
    });
}

fn sort_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let input = unique_rand_int_vec(&mut rng, 1_000, 0, 100_000).unwrap_or_default();

    let mut group = c.benchmark_group("Sort Bench");
    group.bench_function("merge_sort", |b| {
        b.iter_batched(|| input.clone(), |mut v| merge_sort(&mut v), BatchSize::SmallInput)
    });
    group.bench_function("shell_sort", |b| {
        b.iter_batched(|| input.clone(), |mut v| shell_sort(&mut v), BatchSize::SmallInput)
    });
    group.bench_function("insertion_sort", |b| {
        b.iter_batched(|| input.clone(), |mut v| insertion_sort(&mut v), BatchSize::SmallInput)
    });
    group.finish();
}

criterion_group!(benches, dynamic_array_bench, sort_bench);
criterion_main!(benches);
