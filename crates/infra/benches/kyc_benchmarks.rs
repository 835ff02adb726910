use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use kyc_infra::{CustomerService, InMemoryLedger, ServiceConfig};
use kyc_profiles::{OperationMode, SectionName, patch};

fn addresses_payload(n: usize) -> Vec<u8> {
    let entries: Vec<_> = (0..n)
        .map(|i| serde_json::json!({ "City": format!("City-{i}"), "Active": true }))
        .collect();
    serde_json::to_vec(&entries).unwrap()
}

fn registered_service(existing_addresses: usize) -> CustomerService<InMemoryLedger> {
    let service = CustomerService::new(InMemoryLedger::new(), ServiceConfig::default());
    service
        .register(
            "C1",
            br#"{"FirstName":"Ada","LastName":"Lovelace"}"#,
            br#"{"City":"NYC"}"#,
            br#"{"EmailAddress":"a@x.com"}"#,
        )
        .unwrap();
    if existing_addresses > 0 {
        service
            .update(
                "C1",
                SectionName::Addresses,
                OperationMode::Append,
                &addresses_payload(existing_addresses),
            )
            .unwrap();
    }
    service
}

/// Pure merge cost: decode payload + clone record + append.
fn bench_patch_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("patch_apply_append");
    let payload = addresses_payload(1);

    for existing in [1usize, 100, 1_000] {
        let record = registered_service(existing).query("C1").unwrap();
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(existing), &record, |b, record| {
            b.iter(|| {
                patch::apply(
                    black_box(record),
                    SectionName::Addresses,
                    OperationMode::Append,
                    black_box(&payload),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

/// Full read-modify-write: get + decode + apply + encode + guarded put.
fn bench_service_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("service_update_replace");
    let payload = br#"[{"ContactType":"personal","EmailAddress":"a@x.com","Active":true}]"#;

    for existing in [1usize, 100, 1_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_function(BenchmarkId::from_parameter(existing), |b| {
            // Replace keeps the record size stable across iterations.
            let service = registered_service(existing);
            b.iter(|| {
                service
                    .update(
                        "C1",
                        SectionName::Contacts,
                        OperationMode::Replace,
                        black_box(payload.as_slice()),
                    )
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_patch_apply, bench_service_update);
criterion_main!(benches);
