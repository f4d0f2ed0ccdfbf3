use blob_store::local_store::LocalFileBlobStore;
use blob_store::store::BlobStore;
use criterion::{criterion_group, criterion_main, Criterion};
use uuid::Uuid;

fn store_cycle_benchmark(c: &mut Criterion) {
    let base_path = format!("bench_data_{}", Uuid::new_v4());
    let store = LocalFileBlobStore::new(&base_path).unwrap();
    let payload = vec![7u8; 4096];

    c.bench_function("create read delete 4KiB blob", |b| {
        b.iter(|| {
            let id = store.create(&payload).unwrap();
            let data = store.read(&id).unwrap();
            store.delete(&id).unwrap();
            data.len()
        })
    });

    std::fs::remove_dir_all(&base_path).unwrap();
}

criterion_group!(benches, store_cycle_benchmark);
criterion_main!(benches);
