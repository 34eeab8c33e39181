use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use relaydesk_access::AccessScope;
use relaydesk_auth::{Role, Session};
use relaydesk_core::EntityId;
use relaydesk_directory::{Directory, Parcel, Station, seed};

/// Seed directory with `copies` extra stations and parcels per seeded station.
fn inflated_directory(copies: usize) -> Directory {
    let mut dir = seed::demo_directory();
    let stations: Vec<Station> = dir.stations.to_vec();
    let parcels: Vec<Parcel> = dir.parcels.to_vec();

    for n in 0..copies {
        for s in &stations {
            let mut s = s.clone();
            s.id = EntityId::new(format!("{}-{n}", s.id));
            s.name = format!("{}-{n}", s.name);
            dir.stations.upsert(s);
        }
        for p in &parcels {
            let mut p = p.clone();
            p.id = EntityId::new(format!("{}-{n}", p.id));
            dir.parcels.upsert(p);
        }
    }
    dir
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_resolve");

    for copies in [0usize, 100, 1_000] {
        let dir = inflated_directory(copies);
        group.throughput(Throughput::Elements(dir.stations.len() as u64));
        for role in [Role::Provider, Role::Partner, Role::Property] {
            let session = Session::new("u_bench", "翟总", role, "翟总");
            group.bench_with_input(
                BenchmarkId::new(role.as_str(), dir.stations.len()),
                &dir,
                |b, dir| b.iter(|| AccessScope::resolve(black_box(&session), black_box(dir))),
            );
        }
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_filter");
    let dir = inflated_directory(1_000);

    for role in [Role::Platform, Role::Provider, Role::Station] {
        let session = Session::new("u_bench", "翟总", role, "翟总");
        let scope = AccessScope::resolve(&session, &dir);
        group.throughput(Throughput::Elements(dir.parcels.len() as u64));
        group.bench_function(format!("parcels_{}", role.as_str()), |b| {
            b.iter(|| scope.scope(black_box(dir.parcels.as_slice())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_filter);
criterion_main!(benches);
